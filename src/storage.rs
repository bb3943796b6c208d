use core::fmt;
use std::collections::VecDeque;

/// Removal policy of a [Storage].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum StorageMode {
    /// Last in, first out. Drives a depth-first search.
    Stack,
    /// First in, first out. Drives a breadth-first search.
    Queue,
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            StorageMode::Stack => write!(f, "stack"),
            StorageMode::Queue => write!(f, "queue"),
        }
    }
}

/// The search frontier: a single container whose [retrieve](Storage::retrieve) order is fixed
/// by its [StorageMode] at construction.
#[derive(Clone, Debug)]
pub struct Storage<T> {
    mode: StorageMode,
    items: VecDeque<T>,
}

impl<T> Storage<T> {
    pub fn new(mode: StorageMode) -> Storage<T> {
        Storage {
            mode,
            items: VecDeque::new(),
        }
    }

    pub fn stack() -> Storage<T> {
        Storage::new(StorageMode::Stack)
    }

    pub fn queue() -> Storage<T> {
        Storage::new(StorageMode::Queue)
    }

    pub fn mode(&self) -> StorageMode {
        self.mode
    }

    pub fn store(&mut self, item: T) {
        self.items.push_back(item);
    }

    /// Removes the most recently stored item in stack mode and the earliest stored item in
    /// queue mode.
    ///
    /// # Panics
    /// Panics if the storage is empty. Check [is_empty](Storage::is_empty) first.
    pub fn retrieve(&mut self) -> T {
        let item = match self.mode {
            StorageMode::Stack => self.items.pop_back(),
            StorageMode::Queue => self.items.pop_front(),
        };
        match item {
            Some(item) => item,
            None => panic!("retrieve called on empty {} storage", self.mode),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}
