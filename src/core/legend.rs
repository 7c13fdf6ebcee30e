use serde::{Deserialize, Serialize};

/// Shape drawn next to the legend label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendForm {
    /// No form and no space reserved for it.
    None,
    /// No form, but the space is kept.
    Empty,
    /// Backend default (square).
    Default,
    #[default]
    Square,
    Circle,
    Line,
}

/// Dynamic-type text style for the legend font.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontTextStyle {
    LargeTitle,
    Title1,
    Title2,
    Title3,
    Headline,
    Subheadline,
    #[default]
    Body,
    Callout,
    Footnote,
    Caption1,
    Caption2,
}

impl FontTextStyle {
    /// Point size at the default content size category.
    #[must_use]
    pub fn point_size(self) -> f64 {
        match self {
            Self::LargeTitle => 34.0,
            Self::Title1 => 28.0,
            Self::Title2 => 22.0,
            Self::Title3 => 20.0,
            Self::Headline | Self::Body => 17.0,
            Self::Subheadline => 15.0,
            Self::Callout => 16.0,
            Self::Footnote => 13.0,
            Self::Caption1 => 12.0,
            Self::Caption2 => 11.0,
        }
    }

    #[must_use]
    pub fn is_bold(self) -> bool {
        matches!(self, Self::Headline)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendDirection {
    #[default]
    LeftToRight,
    RightToLeft,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LegendOrientation {
    #[default]
    Horizontal,
    Vertical,
}

pub const DEFAULT_LEGEND_FORM_SIZE: f64 = 10.0;

/// The five legend settings, stored together by `enable_legend`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LegendOptions {
    pub form: LegendForm,
    pub font: FontTextStyle,
    pub form_size: f64,
    pub direction: LegendDirection,
    pub orientation: LegendOrientation,
}

impl LegendOptions {
    #[must_use]
    pub fn new(
        form: LegendForm,
        font: FontTextStyle,
        form_size: f64,
        direction: LegendDirection,
        orientation: LegendOrientation,
    ) -> Self {
        Self {
            form,
            font,
            form_size,
            direction,
            orientation,
        }
    }
}

impl Default for LegendOptions {
    fn default() -> Self {
        Self::new(
            LegendForm::default(),
            FontTextStyle::default(),
            DEFAULT_LEGEND_FORM_SIZE,
            LegendDirection::default(),
            LegendOrientation::default(),
        )
    }
}
