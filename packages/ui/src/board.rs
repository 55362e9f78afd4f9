use api::Note;

/// In-memory note list backing the dashboard.
///
/// Fetches replace the list wholesale; create and delete patch it locally
/// without re-fetching.
#[derive(Clone, Debug, PartialEq)]
pub struct NoteBoard {
    notes: Vec<Note>,
    loading: bool,
}

impl Default for NoteBoard {
    fn default() -> Self {
        Self {
            notes: Vec::new(),
            loading: true,
        }
    }
}

impl NoteBoard {
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Server order is kept as-is.
    pub fn loaded(&mut self, notes: Vec<Note>) {
        self.notes = notes;
        self.loading = false;
    }

    pub fn load_failed(&mut self) {
        self.loading = false;
    }

    pub fn prepend(&mut self, note: Note) {
        self.notes.insert(0, note);
    }

    /// Remove the note with `id`, returning it if it was present.
    pub fn remove(&mut self, id: &str) -> Option<Note> {
        let index = self.notes.iter().position(|n| n.id == id)?;
        Some(self.notes.remove(index))
    }

    /// Subtitle under the greeting.
    pub fn summary(&self) -> String {
        match self.notes.len() {
            0 => "Create your first note to get started".to_string(),
            1 => "You have 1 note".to_string(),
            n => format!("You have {n} notes"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn note(id: &str) -> Note {
        let ts = "2026-10-18T09:00:00Z".parse().unwrap();
        Note {
            id: id.to_string(),
            title: format!("Note {id}"),
            content: String::new(),
            created_at: ts,
            updated_at: ts,
        }
    }

    fn ids(board: &NoteBoard) -> Vec<&str> {
        board.notes().iter().map(|n| n.id.as_str()).collect()
    }

    #[test]
    fn test_loading_until_fetch_completes() {
        let mut board = NoteBoard::default();
        assert!(board.is_loading());
        board.loaded(vec![note("c"), note("a"), note("b")]);
        assert!(!board.is_loading());
        // No client-side sorting
        assert_eq!(ids(&board), ["c", "a", "b"]);
    }

    #[test]
    fn test_failed_fetch_ends_loading_empty() {
        let mut board = NoteBoard::default();
        board.load_failed();
        assert!(!board.is_loading());
        assert!(board.is_empty());
        assert_eq!(board.summary(), "Create your first note to get started");
    }

    #[test]
    fn test_prepend_adds_exactly_one_at_front() {
        let mut board = NoteBoard::default();
        board.loaded(vec![note("a"), note("b")]);
        board.prepend(note("new"));
        assert_eq!(ids(&board), ["new", "a", "b"]);
        assert_eq!(board.summary(), "You have 3 notes");
    }

    #[test]
    fn test_remove_only_targeted_note() {
        let mut board = NoteBoard::default();
        board.loaded(vec![note("a"), note("b"), note("c")]);

        let removed = board.remove("b").unwrap();
        assert_eq!(removed.id, "b");
        assert_eq!(ids(&board), ["a", "c"]);

        assert!(board.remove("missing").is_none());
        assert_eq!(ids(&board), ["a", "c"]);
    }

    #[test]
    fn test_summary_singular() {
        let mut board = NoteBoard::default();
        board.loaded(vec![note("a")]);
        assert_eq!(board.summary(), "You have 1 note");
    }
}
