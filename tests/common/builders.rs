use bunner_csp_rs::{ContentSecurityPolicy, CspOptions, DirectiveName, Preset};

enum Step {
    Directive(DirectiveName, Vec<String>),
    ReportUri(String),
    Preset(Preset),
}

#[derive(Default)]
pub struct PolicyBuilder {
    default_src: Option<Vec<String>>,
    report_only: Option<bool>,
    steps: Vec<Step>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn default_src<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.default_src = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn report_only(mut self, enabled: bool) -> Self {
        self.report_only = Some(enabled);
        self
    }

    pub fn directive<N, I, S>(mut self, name: N, values: I) -> Self
    where
        N: Into<DirectiveName>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps.push(Step::Directive(
            name.into(),
            values.into_iter().map(Into::into).collect(),
        ));
        self
    }

    pub fn report_uri(mut self, uri: impl Into<String>) -> Self {
        self.steps.push(Step::ReportUri(uri.into()));
        self
    }

    pub fn preset(mut self, preset: Preset) -> Self {
        self.steps.push(Step::Preset(preset));
        self
    }

    pub fn build(self) -> ContentSecurityPolicy {
        let CspOptions {
            default_src: default_default_src,
            report_only: default_report_only,
        } = CspOptions::default();

        let mut policy = ContentSecurityPolicy::with_options(CspOptions {
            default_src: self.default_src.unwrap_or(default_default_src),
            report_only: self.report_only.unwrap_or(default_report_only),
        });

        for step in self.steps {
            match step {
                Step::Directive(name, values) => {
                    policy
                        .add_directive(name, values)
                        .expect("directive values provided");
                }
                Step::ReportUri(uri) => {
                    policy.add_report_uri([uri]).expect("report uri provided");
                }
                Step::Preset(preset) => {
                    policy.apply_preset(preset);
                }
            }
        }

        policy
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}
