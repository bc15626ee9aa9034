use std::collections::BTreeMap;

/// Variables of one session, kept ordered by name.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: BTreeMap<String, i64>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: BTreeMap::new(),
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.store.get(name).copied()
    }

    /// Reads `name`, creating it with value 0 when it does not exist yet.
    /// The flag tells whether the variable was created by this call.
    pub fn get_or_materialize(&mut self, name: &str) -> (i64, bool) {
        match self.store.get(name) {
            Some(value) => (*value, false),
            None => {
                self.store.insert(name.to_string(), 0);

                (0, true)
            }
        }
    }

    pub fn set(&mut self, name: String, value: i64) {
        self.store.insert(name, value);
    }

    pub fn remove(&mut self, name: &str) -> Option<i64> {
        self.store.remove(name)
    }

    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &i64)> {
        self.store.iter()
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
