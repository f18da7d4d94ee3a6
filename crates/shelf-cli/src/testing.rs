//! Test doubles shared by the CLI unit tests.

use std::cell::{Cell, RefCell};
use std::io::Cursor;
use std::path::{Path, PathBuf};

use shelf_core::{Book, Library, LibraryStore, ShelfError};

use crate::helpers::Console;
use crate::ui::UiContext;

/// Store that keeps the last snapshot in memory and counts saves.
#[derive(Default)]
pub struct MemoryStore {
    initial: Library,
    saved: RefCell<Option<Library>>,
    saves: Cell<usize>,
    fail: bool,
    path: PathBuf,
}

impl MemoryStore {
    pub fn with_books(books: Vec<Book>) -> Self {
        Self {
            initial: Library::from(books),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            path: PathBuf::from("readonly/library.json"),
            ..Self::default()
        }
    }

    pub fn saves(&self) -> usize {
        self.saves.get()
    }

    pub fn saved(&self) -> Option<Library> {
        self.saved.borrow().clone()
    }
}

impl LibraryStore for MemoryStore {
    fn load(&self) -> Library {
        self.initial.clone()
    }

    fn save(&self, library: &Library) -> shelf_core::Result<()> {
        if self.fail {
            return Err(ShelfError::Storage("read-only file system".to_string()));
        }
        self.saves.set(self.saves.get() + 1);
        *self.saved.borrow_mut() = Some(library.clone());
        Ok(())
    }

    fn location(&self) -> &Path {
        &self.path
    }
}

pub type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from `input` with plain output captured in memory.
pub fn console(input: &str) -> TestConsole {
    Console::new(
        Cursor::new(input.as_bytes().to_vec()),
        Vec::new(),
        UiContext::plain(),
    )
}

pub fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).expect("utf8 output")
}
