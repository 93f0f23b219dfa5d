use crate::models::PickerCommand;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffixes of files the picker lets the user choose.
pub const TEXT_FILE_EXTENSIONS: &[&str] = &[
    ".txt", ".md", ".markdown",
    ".go", ".js", ".ts", ".jsx", ".tsx",
    ".py", ".rb", ".rs", ".c", ".h", ".cpp", ".hpp",
    ".java", ".kt", ".swift", ".cs",
    ".html", ".css", ".scss", ".sass", ".less",
    ".json", ".yaml", ".yml", ".toml", ".xml",
    ".sh", ".bash", ".zsh", ".fish",
    ".sql", ".graphql",
    ".vim", ".lua", ".el", ".lisp", ".clj",
    ".r", ".R", ".jl",
    ".tex", ".org", ".rst", ".adoc",
    ".conf", ".cfg", ".ini", ".env",
    ".gitignore", ".dockerignore", ".editorconfig",
];

pub const MAX_HEIGHT: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
    /// Files outside the allowed extensions are listed but cannot be chosen.
    pub selectable: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerOutcome {
    Pending,
    Selected(PathBuf),
    Cancelled,
}

#[derive(Debug)]
pub struct FilePicker {
    dir: PathBuf,
    entries: Vec<Entry>,
    cursor: usize,
    offset: usize,
    height: usize,
    /// Cursor positions of the directories we descended from.
    history: Vec<usize>,
}

impl FilePicker {
    pub fn new(dir: PathBuf, height: usize) -> Self {
        let mut picker = Self {
            dir,
            entries: Vec::new(),
            cursor: 0,
            offset: 0,
            height: height.max(1),
            history: Vec::new(),
        };
        picker.refresh();
        picker
    }

    pub fn in_current_dir(height: usize) -> Self {
        let dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(dir, height)
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn set_height(&mut self, height: usize) {
        self.height = height.max(1);
        self.scroll_to_cursor();
    }

    /// Entries that fit in the current height, with their absolute index.
    pub fn visible(&self) -> impl Iterator<Item = (usize, &Entry)> {
        self.entries
            .iter()
            .enumerate()
            .skip(self.offset)
            .take(self.height)
    }

    pub fn handle(&mut self, command: PickerCommand) -> PickerOutcome {
        match command {
            PickerCommand::Up => {
                self.cursor = self.cursor.saturating_sub(1);
                self.scroll_to_cursor();
            }
            PickerCommand::Down => {
                if self.cursor + 1 < self.entries.len() {
                    self.cursor += 1;
                }
                self.scroll_to_cursor();
            }
            PickerCommand::Open => {
                if self.current().is_some_and(|e| e.is_dir) {
                    self.descend();
                }
            }
            PickerCommand::Back => self.ascend(),
            PickerCommand::Select => match self.current().cloned() {
                Some(entry) if entry.is_dir => self.descend(),
                Some(entry) if entry.selectable => {
                    tracing::info!(target: "picker", path = %entry.path.display(), "file selected");
                    return PickerOutcome::Selected(entry.path);
                }
                _ => {}
            },
            PickerCommand::Cancel => return PickerOutcome::Cancelled,
        }
        PickerOutcome::Pending
    }

    fn current(&self) -> Option<&Entry> {
        self.entries.get(self.cursor)
    }

    fn descend(&mut self) {
        let Some(entry) = self.current() else {
            return;
        };
        self.dir = entry.path.clone();
        self.history.push(self.cursor);
        self.cursor = 0;
        self.refresh();
    }

    fn ascend(&mut self) {
        let Some(parent) = self.dir.parent().map(Path::to_path_buf) else {
            return;
        };
        self.dir = parent;
        self.refresh();
        self.cursor = self
            .history
            .pop()
            .unwrap_or(0)
            .min(self.entries.len().saturating_sub(1));
        self.scroll_to_cursor();
    }

    fn refresh(&mut self) {
        self.entries = list_dir(&self.dir);
        self.cursor = self.cursor.min(self.entries.len().saturating_sub(1));
        self.offset = 0;
        self.scroll_to_cursor();
    }

    fn scroll_to_cursor(&mut self) {
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
    }
}

pub fn is_text_file(name: &str) -> bool {
    TEXT_FILE_EXTENSIONS.iter().any(|ext| name.ends_with(ext))
}

/// Directories first, then files, each alphabetically. Dotfiles are hidden.
/// An unreadable directory lists as empty.
fn list_dir(dir: &Path) -> Vec<Entry> {
    let read = match fs::read_dir(dir) {
        Ok(read) => read,
        Err(err) => {
            tracing::warn!(target: "picker", dir = %dir.display(), %err, "cannot list directory");
            return Vec::new();
        }
    };

    let mut entries: Vec<Entry> = read
        .filter_map(Result::ok)
        .filter_map(|item| {
            let name = item.file_name().to_string_lossy().into_owned();
            if name.starts_with('.') {
                return None;
            }
            let path = item.path();
            // follows symlinks so a link to a directory can be entered
            let is_dir = path.is_dir();
            Some(Entry {
                selectable: !is_dir && is_text_file(&name),
                name,
                path,
                is_dir,
            })
        })
        .collect();

    entries.sort_by(|a, b| b.is_dir.cmp(&a.is_dir).then_with(|| a.name.cmp(&b.name)));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn fixture() -> TempDir {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("books")).unwrap();
        fs::write(dir.path().join("books").join("novel.txt"), "Call me Ishmael.").unwrap();
        fs::write(dir.path().join("notes.md"), "# notes").unwrap();
        fs::write(dir.path().join("image.png"), [0u8, 1, 2]).unwrap();
        fs::write(dir.path().join(".hidden.txt"), "secret").unwrap();
        dir
    }

    fn names(picker: &FilePicker) -> Vec<&str> {
        picker.entries().iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn lists_directories_first_and_hides_dotfiles() {
        let dir = fixture();
        let picker = FilePicker::new(dir.path().to_path_buf(), 10);
        assert_eq!(names(&picker), ["books", "image.png", "notes.md"]);
        let selectable: Vec<bool> = picker.entries().iter().map(|e| e.selectable).collect();
        assert_eq!(selectable, [false, false, true]);
    }

    #[test]
    fn selects_an_allowed_file() {
        let dir = fixture();
        let mut picker = FilePicker::new(dir.path().to_path_buf(), 10);
        assert_eq!(picker.handle(PickerCommand::Down), PickerOutcome::Pending);
        // image.png is not a text file
        assert_eq!(picker.handle(PickerCommand::Select), PickerOutcome::Pending);
        assert_eq!(picker.handle(PickerCommand::Down), PickerOutcome::Pending);
        assert_eq!(
            picker.handle(PickerCommand::Select),
            PickerOutcome::Selected(dir.path().join("notes.md"))
        );
    }

    #[test]
    fn enters_and_leaves_directories() {
        let dir = fixture();
        let mut picker = FilePicker::new(dir.path().to_path_buf(), 10);
        assert_eq!(picker.handle(PickerCommand::Open), PickerOutcome::Pending);
        assert_eq!(picker.dir(), dir.path().join("books"));
        assert_eq!(names(&picker), ["novel.txt"]);
        assert_eq!(
            picker.handle(PickerCommand::Select),
            PickerOutcome::Selected(dir.path().join("books").join("novel.txt"))
        );

        picker.handle(PickerCommand::Back);
        assert_eq!(picker.dir(), dir.path());
        assert_eq!(picker.cursor(), 0);
    }

    #[test]
    fn cancel_is_reported() {
        let dir = fixture();
        let mut picker = FilePicker::new(dir.path().to_path_buf(), 10);
        assert_eq!(picker.handle(PickerCommand::Cancel), PickerOutcome::Cancelled);
    }

    #[test]
    fn scrolls_to_keep_the_cursor_visible() {
        let dir = tempfile::tempdir().unwrap();
        for i in 0..10 {
            fs::write(dir.path().join(format!("f{i}.txt")), "x").unwrap();
        }
        let mut picker = FilePicker::new(dir.path().to_path_buf(), 3);
        for _ in 0..5 {
            picker.handle(PickerCommand::Down);
        }
        let visible: Vec<usize> = picker.visible().map(|(i, _)| i).collect();
        assert_eq!(visible, [3, 4, 5]);

        for _ in 0..20 {
            picker.handle(PickerCommand::Down);
        }
        assert_eq!(picker.cursor(), 9);
        for _ in 0..9 {
            picker.handle(PickerCommand::Up);
        }
        let visible: Vec<usize> = picker.visible().map(|(i, _)| i).collect();
        assert_eq!(visible, [0, 1, 2]);
    }

    #[test]
    fn unreadable_directory_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let mut picker = FilePicker::new(dir.path().join("missing"), 5);
        assert!(picker.entries().is_empty());
        assert_eq!(picker.handle(PickerCommand::Select), PickerOutcome::Pending);
        assert_eq!(picker.handle(PickerCommand::Down), PickerOutcome::Pending);
    }
}
