//! Ordered collection of to-do items

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Total x/y spread of the field (positions land in ±2.5).
const XY_SPREAD: f32 = 5.0;
/// Depth bounds for z.
const Z_MIN: f32 = -2.0;
const Z_MAX: f32 = 2.0;

/// A single to-do record
#[derive(Debug, Clone)]
pub struct TodoItem {
    pub id: Uuid,
    pub text: String,
    /// Where the item floats in the field. Assigned once at creation;
    /// only the rendering layer reads it.
    pub position: [f32; 3],
    pub is_complete: bool,
    pub created_at: DateTime<Utc>,
}

/// Owns the ordered collection of to-do items.
///
/// The store is the only mutator of the collection: `create` appends,
/// `toggle` flips one completion flag, and nothing else changes it.
/// Items are never removed.
#[derive(Debug, Default)]
pub struct TodoStore {
    items: Vec<TodoItem>,
}

impl TodoStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a new item with the given text.
    ///
    /// The text is trimmed first; if nothing remains the store is left
    /// untouched and `None` is returned. A new item starts incomplete at a
    /// random position within the field bounds.
    pub fn create(&mut self, text: &str) -> Option<&TodoItem> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        self.items.push(TodoItem {
            id: Uuid::new_v4(),
            text: text.to_string(),
            position: random_position(),
            is_complete: false,
            created_at: Utc::now(),
        });
        self.items.last()
    }

    /// Flip the completion flag of the item with the given id.
    ///
    /// Unknown ids are ignored. Returns whether an item was toggled.
    pub fn toggle(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|item| item.id == id) {
            Some(item) => {
                item.is_complete = !item.is_complete;
                true
            }
            None => false,
        }
    }

    /// All items, in insertion order.
    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of completed items, for the status bar.
    pub fn completed(&self) -> usize {
        self.items.iter().filter(|item| item.is_complete).count()
    }
}

/// Sample a position within the field bounds: x and y spread around zero,
/// z within the depth range.
fn random_position() -> [f32; 3] {
    let [a, b, c] = random_unit_triple();
    [
        (a - 0.5) * XY_SPREAD,
        (b - 0.5) * XY_SPREAD,
        Z_MIN + c * (Z_MAX - Z_MIN),
    ]
}

/// Three independent samples in [0, 1).
fn random_unit_triple() -> [f32; 3] {
    let mut bytes = [0u8; 12];
    if getrandom::getrandom(&mut bytes).is_err() {
        // Fallback: best-effort mix if the OS RNG is unavailable.
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or(0);
        let pid = std::process::id() as u128;
        let mixed = nanos ^ pid.rotate_left(17);
        bytes.copy_from_slice(&mixed.to_le_bytes()[..12]);
    }

    let mut out = [0.0f32; 3];
    for (i, chunk) in bytes.chunks_exact(4).enumerate() {
        let word = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        out[i] = (word >> 8) as f32 / (1u32 << 24) as f32;
    }
    out
}
