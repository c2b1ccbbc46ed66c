use crate::constants::source;
use crate::directive::DirectiveType::{self, Connect, Font, Frame, Img, Script, Style};
use crate::policy::ContentSecurityPolicy;
use tracing::debug;

type PresetTable = &'static [(DirectiveType, &'static str)];

const EMPTY: PresetTable = &[];

const GOOGLE_TAG_MANAGER: PresetTable = &[
    (Script, source::UNSAFE_INLINE),
    (Script, "https://www.googletagmanager.com"),
    (Img, "https://www.googletagmanager.com"),
];

const GOOGLE_TAG_MANAGER_UNSAFE_EVAL: PresetTable = &[(Script, source::UNSAFE_EVAL)];

const GOOGLE_TAG_MANAGER_PREVIEW: PresetTable = &[
    (Script, "https://tagmanager.google.com"),
    (Style, "https://tagmanager.google.com"),
    (Style, "https://fonts.googleapis.com"),
    (Img, "https://ssl.gstatic.com"),
    (Img, "https://www.gstatic.com"),
    (Font, "https://fonts.gstatic.com"),
    (Font, source::SCHEME_DATA),
];

const GOOGLE_ANALYTICS: PresetTable = &[
    (Script, "https://www.google-analytics.com"),
    (Script, "https://ssl.google-analytics.com"),
    (Img, "https://www.google-analytics.com"),
    (Connect, "https://www.google-analytics.com"),
];

const GOOGLE_OPTIMIZE: PresetTable = &[(Script, "https://www.google-analytics.com")];

const GOOGLE_ADS_CONVERSIONS: PresetTable = &[
    (Script, "https://www.googleadservices.com"),
    (Script, "https://www.google.com"),
    (Img, "https://googleads.g.doubleclick.net"),
    (Img, "https://www.google.com"),
];

const GOOGLE_ADS_REMARKETING: PresetTable = &[
    (Script, "https://www.googleadservices.com"),
    (Script, "https://googleads.g.doubleclick.net"),
    (Script, "https://www.google.com"),
    (Img, "https://www.google.com"),
    (Frame, "https://bid.g.doubleclick.net"),
];

/// Directive bundles required by common third-party services.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Preset {
    /// `allow_unsafe_eval` is needed when custom JavaScript variables are used.
    GoogleTagManager { allow_unsafe_eval: bool },
    GoogleTagManagerPreview,
    GoogleAnalytics,
    GoogleOptimize,
    GoogleAdsConversions,
    GoogleAdsRemarketing,
}

impl Preset {
    /// Returns the `(directive, value)` pairs in the order they are applied.
    pub fn entries(self) -> impl Iterator<Item = (DirectiveType, &'static str)> {
        let (table, extra) = match self {
            Preset::GoogleTagManager { allow_unsafe_eval } => (
                GOOGLE_TAG_MANAGER,
                if allow_unsafe_eval {
                    GOOGLE_TAG_MANAGER_UNSAFE_EVAL
                } else {
                    EMPTY
                },
            ),
            Preset::GoogleTagManagerPreview => (GOOGLE_TAG_MANAGER_PREVIEW, EMPTY),
            Preset::GoogleAnalytics => (GOOGLE_ANALYTICS, EMPTY),
            Preset::GoogleOptimize => (GOOGLE_OPTIMIZE, EMPTY),
            Preset::GoogleAdsConversions => (GOOGLE_ADS_CONVERSIONS, EMPTY),
            Preset::GoogleAdsRemarketing => (GOOGLE_ADS_REMARKETING, EMPTY),
        };

        table.iter().chain(extra.iter()).copied()
    }
}

impl ContentSecurityPolicy {
    pub fn apply_preset(&mut self, preset: Preset) -> &mut Self {
        debug!(?preset, "applying content security policy preset");
        for (directive, value) in preset.entries() {
            self.entry(directive.into())
                .extend_unique(std::iter::once(value.to_string()));
        }
        self
    }

    pub fn add_google_tag_manager(&mut self, allow_unsafe_eval: bool) -> &mut Self {
        self.apply_preset(Preset::GoogleTagManager { allow_unsafe_eval })
    }

    pub fn add_google_tag_manager_preview(&mut self) -> &mut Self {
        self.apply_preset(Preset::GoogleTagManagerPreview)
    }

    pub fn add_google_analytics(&mut self) -> &mut Self {
        self.apply_preset(Preset::GoogleAnalytics)
    }

    pub fn add_google_optimize(&mut self) -> &mut Self {
        self.apply_preset(Preset::GoogleOptimize)
    }

    pub fn add_google_ads_conversions(&mut self) -> &mut Self {
        self.apply_preset(Preset::GoogleAdsConversions)
    }

    pub fn add_google_ads_remarketing(&mut self) -> &mut Self {
        self.apply_preset(Preset::GoogleAdsRemarketing)
    }
}

#[cfg(test)]
#[path = "preset_test.rs"]
mod preset_test;
