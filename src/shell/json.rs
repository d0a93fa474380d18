//! JSON-lines front end: one `ScreenView` object per frame on stdout, one
//! `ClientCommand` object per stdin line.

use crate::domain::Effect;
use crate::protocol::{ClientCommand, ScreenView};

use super::Frontend;

pub struct JsonFrontend;

fn line_of<T: serde::Serialize>(value: &T) -> String {
  let mut out = serde_json::to_string(value).unwrap_or_else(|e| {
    serde_json::json!({ "type": "error", "message": format!("Serialization error: {}", e) }).to_string()
  });
  out.push('\n');
  out
}

impl Frontend for JsonFrontend {
  fn parse(&self, _view: &ScreenView, line: &str) -> Result<ClientCommand, String> {
    serde_json::from_str::<ClientCommand>(line).map_err(|e| format!("Invalid JSON: {}", e))
  }

  fn frame(&self, view: &ScreenView) -> String {
    line_of(view)
  }

  fn error(&self, message: &str) -> String {
    line_of(&serde_json::json!({ "type": "error", "message": message }))
  }

  fn effect(&self, effect: &Effect) -> String {
    line_of(effect)
  }
}
