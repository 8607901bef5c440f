use colorexpr::Span;

/// New text for a range of the edited line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replacement {
    pub span: Span,
    pub text: String,
}

impl Replacement {
    /// Splices `text` into `line` over `span`, counting in characters.
    ///
    /// A span reaching past the end of the line is cut at the end.
    ///
    /// ```
    /// use colorexpr::Span;
    /// use colorpicker::Replacement;
    ///
    /// let replacement = Replacement { span: Span::new(7, 4), text: "#00ff00".into() };
    /// assert_eq!(replacement.apply_to("color: #f00;"), "color: #00ff00;");
    /// ```
    pub fn apply_to(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + self.text.len());
        out.extend(line.chars().take(self.span.start));
        out.push_str(&self.text);
        out.extend(line.chars().skip(self.span.end()));
        out
    }
}
