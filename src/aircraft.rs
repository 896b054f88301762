use crate::error::ModelError;
use std::cell::Cell;
use std::cmp::Ordering;
use std::fmt;
use std::fmt::Formatter;
use std::sync::Arc;

pub type Registration = Arc<str>;

/// A registered airframe. Only availability changes after creation.
#[derive(Debug)]
pub struct Aircraft {
    model: String,
    capacity: u32,
    registration: Registration,
    is_available: Cell<bool>,
}

impl Aircraft {
    pub fn new(model: &str, capacity: u32, registration: &str) -> Result<Aircraft, ModelError> {
        if capacity == 0 {
            return Err(ModelError::ZeroCapacity);
        }
        if registration.trim().is_empty() {
            return Err(ModelError::Empty("registration"));
        }
        Ok(Aircraft {
            model: model.to_string(),
            capacity,
            registration: Arc::from(registration.trim()),
            is_available: Cell::new(true),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    pub fn registration(&self) -> &Registration {
        &self.registration
    }

    pub fn is_available(&self) -> bool {
        self.is_available.get()
    }

    pub fn set_available(&self, available: bool) {
        self.is_available.set(available);
    }

    pub fn cmp_capacity(&self, other: &Aircraft) -> Ordering {
        self.capacity.cmp(&other.capacity)
    }

    pub fn is_larger_than(&self, other: &Aircraft) -> bool {
        self.cmp_capacity(other) == Ordering::Greater
    }

    pub fn info(&self) -> String {
        format!(
            "Aircraft: {}\nRegistration: {}\nCapacity: {}",
            self.model, self.registration, self.capacity
        )
    }
}

impl PartialEq for Aircraft {
    fn eq(&self, other: &Self) -> bool {
        self.registration == other.registration
    }
}

impl Eq for Aircraft {}

impl fmt::Display for Aircraft {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}) - Capacity: {}",
            self.model, self.registration, self.capacity
        )
    }
}
