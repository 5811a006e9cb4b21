use crate::models::{DeviceStateTable, RequestLogTable, Table};

/// Keeps tables in creation order: every table after the tables it references.
pub struct SchemaManager {
    tables: Vec<Box<dyn Table>>,
}

impl SchemaManager {
    pub fn new(tables: Vec<Box<dyn Table>>) -> Self {
        Self {
            tables: Self::order_by_dependencies(tables),
        }
    }

    fn order_by_dependencies(tables: Vec<Box<dyn Table>>) -> Vec<Box<dyn Table>> {
        let mut pending = tables;
        let mut ordered: Vec<Box<dyn Table>> = Vec::with_capacity(pending.len());

        while !pending.is_empty() {
            let (ready, blocked): (Vec<_>, Vec<_>) = pending.into_iter().partition(|table| {
                table
                    .dependencies()
                    .iter()
                    .all(|dependency| ordered.iter().any(|done| done.name() == *dependency))
            });

            if ready.is_empty() {
                let names: Vec<&str> = blocked.iter().map(|table| table.name()).collect();
                panic!("Circular dependency between tables: {}", names.join(", "));
            }

            ordered.extend(ready);
            pending = blocked;
        }

        ordered
    }

    pub fn create_schema(&self) -> Vec<String> {
        self.tables.iter().map(|table| table.create()).collect()
    }

    pub fn dispose_schema(&self) -> Vec<String> {
        self.tables.iter().rev().map(|table| table.dispose()).collect()
    }
}

impl Default for SchemaManager {
    fn default() -> Self {
        SchemaManager::new(vec![Box::new(DeviceStateTable), Box::new(RequestLogTable)])
    }
}
