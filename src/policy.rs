use crate::constants::header;
use crate::directive::{DirectiveName, DirectiveType};
use crate::options::CspOptions;
use crate::result::{CspError, Header};
use crate::source_list::SourceList;
use crate::util::{directive_token, trimmed_values};
use indexmap::IndexMap;
use indexmap::map::Entry;
use std::borrow::Cow;
use std::fmt::Display;
use tracing::{debug, trace};

/// Accumulates directives and serializes them into a `Content-Security-Policy`
/// header value.
///
/// Every [`DirectiveType`] is present from construction with an empty source
/// list, so the header always lists those directives first and in declaration
/// order. Custom directives follow in the order they were first added.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContentSecurityPolicy {
    directives: IndexMap<String, SourceList>,
    report_only: bool,
}

impl Default for ContentSecurityPolicy {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentSecurityPolicy {
    pub fn new() -> Self {
        let directives = DirectiveType::ALL
            .iter()
            .map(|directive| (directive.as_str().to_string(), SourceList::new()))
            .collect();

        Self {
            directives,
            report_only: false,
        }
    }

    /// Creates a policy with `default-src` seeded from `values`.
    pub fn with_default<I, S>(values: I) -> Result<Self, CspError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut policy = Self::new();
        policy.add_directive(DirectiveType::Default, values)?;
        Ok(policy)
    }

    pub fn with_options(options: CspOptions) -> Self {
        let mut policy = Self::new();
        policy.report_only = options.report_only;

        let defaults = trimmed_values(options.default_src);
        if !defaults.is_empty() {
            policy
                .entry(DirectiveType::Default.into())
                .extend_unique(defaults);
        }

        policy
    }

    /// Appends values to a directive, creating it when absent. Values already
    /// present in the directive are skipped. A blank name is ignored.
    pub fn add_directive<N, I, S>(&mut self, name: N, values: I) -> Result<&mut Self, CspError>
    where
        N: Into<DirectiveName>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = require_values("add_directive", values)?;
        let name = name.into();
        if name.is_empty() {
            debug!("add skipped for blank directive name");
            return Ok(self);
        }
        self.entry(name).extend_unique(values);
        Ok(self)
    }

    /// Appends report endpoints to `report-uri`.
    ///
    /// Accepts anything printable, so both plain strings and `url::Url`
    /// work. A `Url` is written in its serialized form, which adds a trailing
    /// slash to bare hosts (`http://test.test` becomes `http://test.test/`).
    pub fn add_report_uri<I>(&mut self, uris: I) -> Result<&mut Self, CspError>
    where
        I: IntoIterator,
        I::Item: Display,
    {
        let values = require_values(
            "add_report_uri",
            uris.into_iter().map(|uri| uri.to_string()),
        )?;
        self.entry(DirectiveName::report_uri()).extend_unique(values);
        Ok(self)
    }

    /// Overwrites the values of an existing directive. Unknown directives are
    /// left untouched.
    pub fn replace_directive_values<N, I, S>(
        &mut self,
        name: N,
        values: I,
    ) -> Result<&mut Self, CspError>
    where
        N: Into<DirectiveName>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = require_values("replace_directive_values", values)?;
        let name = name.into();
        match self.directives.get_mut(name.as_str()) {
            Some(list) => list.replace(values),
            None => debug!(directive = %name, "replace skipped for undeclared directive"),
        }
        Ok(self)
    }

    /// Removes each given value from a directive. Values are trimmed before
    /// matching; blank or absent values are ignored.
    pub fn remove_directive_values<N, I, S>(
        &mut self,
        name: N,
        values: I,
    ) -> Result<&mut Self, CspError>
    where
        N: Into<DirectiveName>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values: Vec<String> = values
            .into_iter()
            .map(|value| {
                let value: String = value.into();
                value.trim().to_string()
            })
            .collect();
        if values.is_empty() {
            return Err(CspError::MissingValues {
                operation: "remove_directive_values",
            });
        }
        if let Some(list) = self.directives.get_mut(name.into().as_str()) {
            list.remove_all(&values);
        }
        Ok(self)
    }

    /// Empties a directive. The entry keeps its position in the header.
    pub fn clear_directive<N>(&mut self, name: N) -> &mut Self
    where
        N: Into<DirectiveName>,
    {
        if let Some(list) = self.directives.get_mut(name.into().as_str()) {
            list.clear();
        }
        self
    }

    pub fn values<N>(&self, name: N) -> Option<&[String]>
    where
        N: Into<DirectiveName>,
    {
        self.directives
            .get(name.into().as_str())
            .map(SourceList::values)
    }

    /// Iterates over the directives that would be emitted, paired with their
    /// header tokens.
    pub fn directives(&self) -> impl Iterator<Item = (Cow<'_, str>, &[String])> {
        self.directives
            .iter()
            .filter(|(_, list)| !list.is_empty())
            .map(|(name, list)| (directive_token(name), list.values()))
    }

    pub fn is_empty(&self) -> bool {
        self.directives.values().all(SourceList::is_empty)
    }

    pub fn is_report_only(&self) -> bool {
        self.report_only
    }

    pub fn set_report_only(&mut self, enabled: bool) -> &mut Self {
        self.report_only = enabled;
        self
    }

    /// Produces the header value, e.g. `default-src 'none'; img-src 'self';`.
    pub fn serialize(&self) -> Result<String, CspError> {
        let mut header = String::new();

        for (name, list) in &self.directives {
            let Some(value) = list.header_value() else {
                continue;
            };

            if !header.is_empty() {
                header.push(' ');
            }
            header.push_str(&directive_token(name));
            header.push(' ');
            header.push_str(&value);
            header.push(';');
        }

        let header = header.trim();
        if header.is_empty() {
            debug!("content security policy has no populated directives");
            return Err(CspError::EmptyPolicy);
        }

        trace!(len = header.len(), "serialized content security policy");
        Ok(header.to_string())
    }

    pub fn header(&self) -> Result<Header, CspError> {
        let name = if self.report_only {
            header::CONTENT_SECURITY_POLICY_REPORT_ONLY
        } else {
            header::CONTENT_SECURITY_POLICY
        };

        Ok(Header {
            name,
            value: self.serialize()?,
        })
    }

    pub(crate) fn entry(&mut self, name: DirectiveName) -> &mut SourceList {
        match self.directives.entry(name.into_string()) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                debug!(directive = %entry.key(), "declared custom directive");
                entry.insert(SourceList::new())
            }
        }
    }
}

fn require_values<I, S>(operation: &'static str, values: I) -> Result<Vec<String>, CspError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let values = trimmed_values(values);
    if values.is_empty() {
        return Err(CspError::MissingValues { operation });
    }
    Ok(values)
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
