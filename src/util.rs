//! Small utility helpers used across modules.

/// Greedy word wrap to `width` columns. Words longer than the width get a
/// line of their own rather than being split.
pub fn wrap_text(s: &str, width: usize) -> Vec<String> {
  let mut lines = Vec::new();
  let mut line = String::new();
  for word in s.split_whitespace() {
    if !line.is_empty() && line.chars().count() + 1 + word.chars().count() > width {
      lines.push(std::mem::take(&mut line));
    }
    if !line.is_empty() {
      line.push(' ');
    }
    line.push_str(word);
  }
  if !line.is_empty() {
    lines.push(line);
  }
  lines
}

/// Log-safe truncation for user input.
/// Avoids spamming logs with huge pasted lines.
pub fn trunc_for_log(s: &str, max: usize) -> String {
  match s.char_indices().nth(max) {
    None => s.to_string(),
    Some((cut, _)) => format!("{}… ({} bytes total)", &s[..cut], s.len()),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn wraps_on_word_boundaries() {
    assert_eq!(wrap_text("find a student record quickly", 12), vec!["find a", "student", "record", "quickly"]);
    assert_eq!(wrap_text("  ", 10), Vec::<String>::new());
    assert_eq!(wrap_text("supercalifragilistic yes", 5), vec!["supercalifragilistic", "yes"]);
  }

  #[test]
  fn truncation_respects_char_boundaries() {
    assert_eq!(trunc_for_log("short", 10), "short");
    assert_eq!(trunc_for_log("ééééé", 2), "éé… (10 bytes total)");
  }
}
