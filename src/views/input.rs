/// Single-line text buffer behind the search field.
///
/// The cursor is a byte offset that always sits on a char boundary.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryInput {
    text: String,
    cursor: usize,
}

/// What a key press asked the search view to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    Edited,
    Moved,
    Submit,
    Ignored,
}

impl QueryInput {
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn insert(&mut self, s: &str) {
        self.text.insert_str(self.cursor, s);
        self.cursor += s.len();
    }

    pub fn backspace(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(ch) => {
                self.cursor -= ch.len_utf8();
                self.text.remove(self.cursor);
                true
            }
            None => false,
        }
    }

    pub fn delete(&mut self) -> bool {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
            true
        } else {
            false
        }
    }

    pub fn move_left(&mut self) -> bool {
        match self.text[..self.cursor].chars().next_back() {
            Some(ch) => {
                self.cursor -= ch.len_utf8();
                true
            }
            None => false,
        }
    }

    pub fn move_right(&mut self) -> bool {
        match self.text[self.cursor..].chars().next() {
            Some(ch) => {
                self.cursor += ch.len_utf8();
                true
            }
            None => false,
        }
    }

    /// Applies a key by its gpui name; `typed` is the character it produced.
    pub fn handle_key(&mut self, key: &str, typed: Option<&str>) -> KeyOutcome {
        let changed = match key {
            "enter" => return KeyOutcome::Submit,
            "backspace" => return edit(self.backspace()),
            "delete" => return edit(self.delete()),
            "left" => self.move_left(),
            "right" => self.move_right(),
            "home" => {
                self.cursor = 0;
                true
            }
            "end" => {
                self.cursor = self.text.len();
                true
            }
            _ => match typed.filter(|s| !s.is_empty() && !s.chars().any(char::is_control)) {
                Some(s) => {
                    self.insert(s);
                    return KeyOutcome::Edited;
                }
                None => false,
            },
        };
        if changed {
            KeyOutcome::Moved
        } else {
            KeyOutcome::Ignored
        }
    }

    /// Text with a `|` caret at the cursor.
    pub fn with_caret(&self) -> String {
        let mut display = self.text.clone();
        display.insert(self.cursor, '|');
        display
    }
}

fn edit(changed: bool) -> KeyOutcome {
    if changed {
        KeyOutcome::Edited
    } else {
        KeyOutcome::Ignored
    }
}
