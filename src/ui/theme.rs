/// The one place styling variation lives. Earlier iterations of this
/// front-end forked whole components per look; every component now reads
/// these values from context instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    pub primary: &'static str,
    pub accent: &'static str,
    pub background: &'static str,
    pub surface: &'static str,
    pub text: &'static str,
    pub text_muted: &'static str,
    pub border: &'static str,
    pub danger: &'static str,
    pub success: &'static str,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            primary: "#235d4c",
            accent: "#b5955b",
            background: "#f7f7f5",
            surface: "#ffffff",
            text: "#1f2937",
            text_muted: "#6b7280",
            border: "#e5e7eb",
            danger: "#b91c1c",
            success: "#15803d",
        }
    }
}

impl Theme {
    pub fn card(&self) -> String {
        format!(
            "background: {}; border: 1px solid {}; border-radius: 10px; padding: 20px;",
            self.surface, self.border
        )
    }

    pub fn button_primary(&self) -> String {
        format!(
            "background: {}; color: #ffffff; border: none; border-radius: 6px; \
             padding: 10px 20px; font-weight: 600; cursor: pointer;",
            self.accent
        )
    }

    pub fn button_outline(&self) -> String {
        format!(
            "background: transparent; color: {accent}; border: 2px solid {accent}; \
             border-radius: 6px; padding: 8px 18px; font-weight: 600; cursor: pointer;",
            accent = self.accent
        )
    }

    pub fn tag(&self) -> String {
        format!(
            "display: inline-block; background: {}14; color: {}; border-radius: 999px; \
             padding: 2px 10px; font-size: 13px;",
            self.primary, self.primary
        )
    }

    pub fn chip(&self, selected: bool) -> String {
        if selected {
            format!(
                "background: {}; color: #ffffff; border: 2px solid {}; border-radius: 999px; \
                 padding: 6px 14px; font-size: 14px; cursor: pointer;",
                self.accent, self.accent
            )
        } else {
            format!(
                "background: {}; color: {}; border: 2px solid {}40; border-radius: 999px; \
                 padding: 6px 14px; font-size: 14px; cursor: pointer;",
                self.surface, self.text, self.accent
            )
        }
    }

    pub fn input(&self) -> String {
        format!(
            "width: 100%; box-sizing: border-box; padding: 10px 12px; border-radius: 6px; \
             border: 2px solid {}4d; background: {}; color: {}; font-size: 15px;",
            self.primary, self.surface, self.text
        )
    }

    pub fn label(&self) -> String {
        format!(
            "display: block; margin-bottom: 6px; font-size: 14px; font-weight: 600; color: {};",
            self.text
        )
    }

    pub fn muted(&self) -> String {
        format!("color: {}; font-size: 14px;", self.text_muted)
    }
}
