// src/hero/src/bag.rs
use strum::Display;
use thiserror::Error;

/// Things a hero can carry
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
pub enum Item {
    Potion,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BagError {
    #[error("no {0} in the bag")]
    ItemNotFound(Item),
}

/// Ordered inventory; duplicates are separate entries
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Bag {
    items: Vec<Item>,
}

impl Bag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bag holding `count` copies of `item`
    pub fn with_items(item: Item, count: usize) -> Self {
        Self {
            items: vec![item; count],
        }
    }

    pub fn add(&mut self, item: Item) {
        self.items.push(item);
    }

    /// Remove the first matching item
    pub fn take(&mut self, item: Item) -> Result<Item, BagError> {
        let index = self
            .items
            .iter()
            .position(|i| *i == item)
            .ok_or(BagError::ItemNotFound(item))?;
        Ok(self.items.remove(index))
    }

    pub fn count(&self, item: Item) -> usize {
        self.items.iter().filter(|i| **i == item).count()
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Display names in bag order
    pub fn names(&self) -> Vec<String> {
        self.items.iter().map(|i| i.to_string()).collect()
    }
}
