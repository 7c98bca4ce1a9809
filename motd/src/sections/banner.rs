//! Banner art

const RABBITS: &str = r#"
      (\(\         /)/)
      (-.-)       (-.-)
    o_(")(")     (")(")_o
"#;

/// Static art shown above the report
pub fn banner() -> &'static str {
    RABBITS
}
