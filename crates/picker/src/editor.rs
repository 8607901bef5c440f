//! The color editor model.
//!
//! [`ColorEditor`] holds everything the picker widget shows: the output color,
//! the hue / saturation-value / opacity control positions and the selected
//! output format. Views never mutate the color directly. Each interaction is
//! described by an [`UpdateReason`] and fed to [`ColorEditor::apply`], which
//! derives the new color and tells observers which views need to re-sync.
//!
//! ```
//! use colorexpr::{ColorFormat, ColorValue};
//! use picker::{ColorEditor, UpdateReason};
//!
//! let mut editor = ColorEditor::new(ColorValue::rgb(255, 0, 0), ColorFormat::Hex);
//! editor.apply(UpdateReason::HueSlider(120));
//! assert_eq!(editor.color(), ColorValue::rgb(0, 255, 0));
//! assert_eq!(editor.preview(), "#00ff00");
//! ```

use colorexpr::{ColorFormat, ColorValue, FormatFamily, FormatOptions, Hsv};

use crate::selector::FormatSelector;

/// A view bound to the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    /// The saturation/value plane.
    ColorPicker,
    HueSlider,
    OpacitySlider,
}

/// Which control produced a color change, with the value it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateReason {
    /// The saturation/value plane moved.
    ColorPicker { saturation: u8, value: u8 },
    /// The hue slider moved (0-359).
    HueSlider(u16),
    /// The opacity slider moved (0-255).
    OpacitySlider(u8),
    /// The color was set from code, e.g. from a parsed literal.
    Programmatic(ColorValue),
}

impl UpdateReason {
    /// The views that must re-sync after this change. The view that caused
    /// the change is never included.
    pub fn refreshed_views(&self) -> &'static [View] {
        match self {
            UpdateReason::ColorPicker { .. } => &[View::OpacitySlider],
            UpdateReason::HueSlider(_) => &[View::ColorPicker, View::OpacitySlider],
            UpdateReason::OpacitySlider(_) => &[],
            UpdateReason::Programmatic(_) => {
                &[View::ColorPicker, View::HueSlider, View::OpacitySlider]
            }
        }
    }

    pub fn refreshes(&self, view: View) -> bool {
        self.refreshed_views().contains(&view)
    }
}

type ColorObserver = Box<dyn FnMut(&ColorValue, UpdateReason)>;
type FormatObserver = Box<dyn FnMut(ColorFormat)>;

/// State behind the color picker widget.
pub struct ColorEditor {
    color: ColorValue,
    /// Slider positions. Kept apart from `color` so a gray keeps its hue.
    hsv: Hsv,
    selector: FormatSelector,
    color_observers: Vec<ColorObserver>,
    format_observers: Vec<FormatObserver>,
}

impl Default for ColorEditor {
    fn default() -> Self {
        Self::new(ColorValue::rgb(255, 0, 0), ColorFormat::default())
    }
}

impl ColorEditor {
    pub fn new(color: ColorValue, format: ColorFormat) -> Self {
        Self {
            color,
            hsv: color.hsv(),
            selector: FormatSelector::new(format),
            color_observers: Vec::new(),
            format_observers: Vec::new(),
        }
    }

    pub fn color(&self) -> ColorValue {
        self.color
    }

    pub fn hue(&self) -> u16 {
        self.hsv.hue
    }

    pub fn saturation(&self) -> u8 {
        self.hsv.saturation
    }

    pub fn value(&self) -> u8 {
        self.hsv.value
    }

    pub fn opacity(&self) -> u8 {
        self.color.a
    }

    pub fn selector(&self) -> &FormatSelector {
        &self.selector
    }

    pub fn output_format(&self) -> ColorFormat {
        self.selector.format()
    }

    /// Registers a callback run after every color change.
    pub fn on_color_changed<F>(&mut self, observer: F)
    where
        F: FnMut(&ColorValue, UpdateReason) + 'static,
    {
        self.color_observers.push(Box::new(observer));
    }

    /// Registers a callback run whenever the output format changes.
    pub fn on_format_changed<F>(&mut self, observer: F)
    where
        F: FnMut(ColorFormat) + 'static,
    {
        self.format_observers.push(Box::new(observer));
    }

    /// Applies a change from one of the controls and notifies observers.
    pub fn apply(&mut self, reason: UpdateReason) -> ColorValue {
        let alpha = self.color.a;

        self.color = match reason {
            UpdateReason::ColorPicker { saturation, value } => {
                self.hsv.saturation = saturation;
                self.hsv.value = value;
                self.hsv_color(alpha)
            }
            UpdateReason::HueSlider(hue) => {
                self.hsv.hue = hue.min(359);
                self.hsv_color(alpha)
            }
            UpdateReason::OpacitySlider(opacity) => self.color.with_alpha(opacity),
            UpdateReason::Programmatic(color) => {
                let hsv = color.hsv();
                self.hsv = if hsv.saturation == 0 {
                    Hsv { hue: self.hsv.hue, ..hsv }
                } else {
                    hsv
                };
                color
            }
        };

        log::debug!("editor update from {:?}: {}", reason, self.color);

        let color = self.color;
        for observer in &mut self.color_observers {
            observer(&color, reason);
        }
        color
    }

    /// Sets the color from code. Does nothing when the color is unchanged.
    pub fn set_color(&mut self, color: ColorValue) {
        if color != self.color {
            self.apply(UpdateReason::Programmatic(color));
        }
    }

    /// Moves the hue slider, clamping to `0..=359`.
    pub fn set_hue(&mut self, hue: u16) {
        let hue = hue.min(359);
        if hue != self.hsv.hue {
            self.apply(UpdateReason::HueSlider(hue));
        }
    }

    pub fn set_opacity(&mut self, opacity: u8) {
        if opacity != self.color.a {
            self.apply(UpdateReason::OpacitySlider(opacity));
        }
    }

    pub fn set_saturation_value(&mut self, saturation: u8, value: u8) {
        if (saturation, value) != (self.hsv.saturation, self.hsv.value) {
            self.apply(UpdateReason::ColorPicker { saturation, value });
        }
    }

    /// Selects an output family; see [`FormatSelector::select_family`].
    pub fn select_family(&mut self, family: FormatFamily) -> ColorFormat {
        let before = self.selector.format();
        let after = self.selector.select_family(family);
        self.notify_format(before, after);
        after
    }

    /// Toggles a sub-option; see [`FormatSelector::toggle`].
    pub fn toggle_option(&mut self, option: FormatOptions) -> ColorFormat {
        let before = self.selector.format();
        let after = self.selector.toggle(option);
        self.notify_format(before, after);
        after
    }

    /// The current color rendered in the selected output format.
    pub fn preview(&self) -> String {
        colorexpr::format(&self.color, self.selector.format())
    }

    fn hsv_color(&self, alpha: u8) -> ColorValue {
        ColorValue::from_hsv_int(self.hsv.hue, self.hsv.saturation, self.hsv.value, alpha)
    }

    fn notify_format(&mut self, before: ColorFormat, after: ColorFormat) {
        if before == after {
            return;
        }
        log::debug!("output format {before:?} -> {after:?}");
        for observer in &mut self.format_observers {
            observer(after);
        }
    }
}
