use crate::geometry::Region;

use super::{to_path_commands, PathCommand};

/// Writes regions as SVG path data for use in a `<clipPath>`.
#[derive(Debug, Clone, Copy)]
pub struct SvgClipPath {
    decimals: usize,
}

impl Default for SvgClipPath {
    fn default() -> Self {
        Self { decimals: 3 }
    }
}

impl SvgClipPath {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the maximum number of decimals written per coordinate.
    #[must_use]
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Fill rule under which the path data reproduces the region.
    #[must_use]
    pub fn fill_rule(&self) -> &'static str {
        "evenodd"
    }

    /// Path data (`M x y L x y ... Z`) for the region. Empty for an empty region.
    #[must_use]
    pub fn path_data(&self, region: &Region) -> String {
        let mut out = String::new();
        for command in to_path_commands(region) {
            if !out.is_empty() {
                out.push(' ');
            }
            let piece = match command {
                PathCommand::MoveTo(p) => format!("M {} {}", self.num(p.x), self.num(p.y)),
                PathCommand::LineTo(p) => format!("L {} {}", self.num(p.x), self.num(p.y)),
                PathCommand::Close => "Z".to_owned(),
            };
            out.push_str(&piece);
        }
        out
    }

    /// A complete `<clipPath>` element with the given id.
    #[must_use]
    pub fn clip_path_element(&self, id: &str, region: &Region) -> String {
        format!(
            r#"<clipPath id="{id}"><path d="{}" clip-rule="{}"/></clipPath>"#,
            self.path_data(region),
            self.fill_rule()
        )
    }

    /// Formats a coordinate with trailing zeros trimmed.
    fn num(&self, value: f64) -> String {
        let s = format!("{value:.prec$}", prec = self.decimals);
        let s = if s.contains('.') {
            s.trim_end_matches('0').trim_end_matches('.')
        } else {
            s.as_str()
        };
        if s == "-0" {
            "0".to_owned()
        } else {
            s.to_owned()
        }
    }
}
