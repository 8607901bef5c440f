use colorexpr::{ColorExpr, ColorFormat, ColorValue, FormatFamily, FormatOptions, ParseError, Span};
use picker::{ColorEditor, UpdateReason};

use crate::error::{PickerError, Result};
use crate::replacement::Replacement;
use crate::settings::PickerSettings;

/// An open edit of one literal.
pub struct EditSession {
    editor: ColorEditor,
    /// Where the literal currently sits; tracks intermediate inserts.
    span: Span,
    /// The literal text currently in the buffer.
    text: String,
    original: ColorExpr,
}

impl EditSession {
    fn open(line: &str, expr: ColorExpr, format: ColorFormat) -> Self {
        let text = line
            .chars()
            .skip(expr.span.start)
            .take(expr.span.len)
            .collect();
        Self {
            editor: ColorEditor::new(expr.value, format),
            span: expr.span,
            text,
            original: expr,
        }
    }

    pub fn editor(&self) -> &ColorEditor {
        &self.editor
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// The literal as it was detected when the session opened.
    pub fn original(&self) -> ColorExpr {
        self.original
    }

    pub fn color(&self) -> ColorValue {
        self.editor.color()
    }

    fn replacement(&self) -> Replacement {
        Replacement {
            span: self.span,
            text: self.editor.preview(),
        }
    }
}

/// Host entry point: finds a literal under the cursor and drives its edit.
///
/// All buffer writes go through the `apply` callback given to [`ColorPicker::new`].
///
/// ```
/// use colorexpr::ColorValue;
/// use colorpicker::{ColorPicker, PickerSettings};
///
/// let line = "color: #f00;";
/// let mut written = Vec::new();
/// let mut picker = ColorPicker::new(PickerSettings::default(), |r| written.push(r.clone()));
///
/// assert!(picker.trigger(line, 8)?);
/// picker.set_color(ColorValue::rgb(0, 255, 0))?;
/// let replacement = picker.commit()?;
/// drop(picker);
///
/// assert_eq!(replacement.apply_to(line), "color: #00ff00;");
/// assert_eq!(written, vec![replacement]);
/// # Ok::<(), colorpicker::PickerError>(())
/// ```
pub struct ColorPicker<F>
where
    F: FnMut(&Replacement),
{
    settings: PickerSettings,
    apply: F,
    session: Option<EditSession>,
}

impl<F> ColorPicker<F>
where
    F: FnMut(&Replacement),
{
    pub fn new(settings: PickerSettings, apply: F) -> Self {
        Self {
            settings,
            apply,
            session: None,
        }
    }

    pub fn settings(&self) -> &PickerSettings {
        &self.settings
    }

    pub fn session(&self) -> Option<&EditSession> {
        self.session.as_ref()
    }

    pub fn is_editing(&self) -> bool {
        self.session.is_some()
    }

    /// Opens a session on the literal at `offset` in `line`.
    ///
    /// Returns `Ok(false)` when no literal touches the offset. Any session
    /// already open is discarded first.
    pub fn trigger(&mut self, line: &str, offset: usize) -> Result<bool> {
        if self.session.take().is_some() {
            log::debug!("discarding open session");
        }

        let expr = match colorexpr::parse(line, offset) {
            Ok(expr) => expr,
            Err(ParseError::NoLiteralFound { .. }) => {
                log::debug!("no color literal at offset {offset}");
                return Ok(false);
            }
            Err(e) => return Err(e.into()),
        };

        let format = if self.settings.keep_original_format {
            expr.format
        } else {
            self.settings.default_format
        };
        log::debug!(
            "opened session on {:?} at {:?}, writing {:?}",
            expr.format,
            expr.span,
            format
        );
        self.session = Some(EditSession::open(line, expr, format));
        Ok(true)
    }

    pub fn set_color(&mut self, color: ColorValue) -> Result<()> {
        self.edit(|editor| editor.set_color(color))
    }

    pub fn set_hue(&mut self, hue: u16) -> Result<()> {
        self.edit(|editor| editor.set_hue(hue))
    }

    pub fn set_opacity(&mut self, opacity: u8) -> Result<()> {
        self.edit(|editor| editor.set_opacity(opacity))
    }

    pub fn set_saturation_value(&mut self, saturation: u8, value: u8) -> Result<()> {
        self.edit(|editor| editor.set_saturation_value(saturation, value))
    }

    pub fn select_family(&mut self, family: FormatFamily) -> Result<ColorFormat> {
        let mut format = ColorFormat::default();
        self.edit(|editor| format = editor.select_family(family))?;
        Ok(format)
    }

    pub fn toggle_option(&mut self, option: FormatOptions) -> Result<ColorFormat> {
        let mut format = ColorFormat::default();
        self.edit(|editor| format = editor.toggle_option(option))?;
        Ok(format)
    }

    /// Binds a view to color changes of the open session.
    ///
    /// Observers belong to the session and are dropped when it closes.
    pub fn on_color_changed<O>(&mut self, observer: O) -> Result<()>
    where
        O: FnMut(&ColorValue, UpdateReason) + 'static,
    {
        let session = self.session.as_mut().ok_or(PickerError::NoActiveSession)?;
        session.editor.on_color_changed(observer);
        Ok(())
    }

    /// Binds a view to output-format changes of the open session.
    pub fn on_format_changed<O>(&mut self, observer: O) -> Result<()>
    where
        O: FnMut(ColorFormat) + 'static,
    {
        let session = self.session.as_mut().ok_or(PickerError::NoActiveSession)?;
        session.editor.on_format_changed(observer);
        Ok(())
    }

    /// The text a commit would write right now.
    pub fn preview(&self) -> Result<String> {
        self.session
            .as_ref()
            .map(|session| session.editor.preview())
            .ok_or(PickerError::NoActiveSession)
    }

    /// Writes the final color back and closes the session.
    pub fn commit(&mut self) -> Result<Replacement> {
        let session = self.session.take().ok_or(PickerError::NoActiveSession)?;
        let replacement = session.replacement();
        log::debug!("commit {:?} -> {}", replacement.span, replacement.text);
        (self.apply)(&replacement);
        Ok(replacement)
    }

    /// Closes the session without writing.
    ///
    /// Text already inserted by `insert_on_change` stays in the buffer.
    pub fn cancel(&mut self) -> Result<()> {
        self.session.take().ok_or(PickerError::NoActiveSession)?;
        log::debug!("session cancelled");
        Ok(())
    }

    fn edit(&mut self, change: impl FnOnce(&mut ColorEditor)) -> Result<()> {
        let session = self.session.as_mut().ok_or(PickerError::NoActiveSession)?;
        change(&mut session.editor);

        if self.settings.insert_on_change {
            let replacement = session.replacement();
            if replacement.text != session.text {
                (self.apply)(&replacement);
                session.span = Span::new(session.span.start, replacement.text.chars().count());
                session.text = replacement.text;
            }
        }
        Ok(())
    }
}
