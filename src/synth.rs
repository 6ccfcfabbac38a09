//! Synthetic row generation respecting foreign-key order.

use crate::schema::{Column, DataType, Schema, Table};
use chrono::{Duration, NaiveDateTime, Utc};
use indexmap::IndexMap;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use serde_json::{Map, Value, json};
use tracing::warn;

const FIRST_NAMES: [&str; 8] = [
    "Alice", "Bob", "Charlie", "Diana", "Eve", "Frank", "Grace", "Henry",
];
const LAST_NAMES: [&str; 7] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller",
];

/// Probability that a nullable, non-key column is left empty.
const NULL_RATE: f64 = 0.1;

pub type Row = Map<String, Value>;

/// Generated rows keyed by table, in generation order.
pub type Dataset = IndexMap<String, Vec<Row>>;

pub struct Generator {
    rng: StdRng,
    now: NaiveDateTime,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl Generator {
    pub fn new(rng: StdRng) -> Self {
        Self {
            rng,
            now: Utc::now().naive_utc(),
        }
    }

    /// Deterministic generator for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Reference time that generated dates count back from.
    pub fn with_now(mut self, now: NaiveDateTime) -> Self {
        self.now = now;
        self
    }

    /// Generate `rows` rows per table.
    ///
    /// A table is generated only after every table its foreign keys point
    /// at. When a reference cycle blocks progress, the remaining tables are
    /// generated in schema order and their unresolved references are null.
    pub fn generate(&mut self, schema: &Schema, rows: usize) -> Dataset {
        let mut data = Dataset::new();

        while data.len() < schema.tables.len() {
            let ready: Vec<&Table> = schema
                .tables()
                .filter(|t| !data.contains_key(&t.name))
                .filter(|t| dependencies_met(t, &data))
                .collect();

            let batch = if ready.is_empty() {
                let blocked: Vec<&Table> = schema
                    .tables()
                    .filter(|t| !data.contains_key(&t.name))
                    .collect();
                warn!(
                    tables = ?blocked.iter().map(|t| t.name.as_str()).collect::<Vec<_>>(),
                    "foreign key cycle, generating remaining tables in schema order"
                );
                blocked
            } else {
                ready
            };

            for table in batch {
                let generated = self.generate_table(table, rows, &data);
                data.insert(table.name.clone(), generated);
            }
        }

        data
    }

    fn generate_table(&mut self, table: &Table, rows: usize, existing: &Dataset) -> Vec<Row> {
        let mut out: Vec<Row> = Vec::with_capacity(rows);

        for i in 0..rows {
            let mut row = Row::new();
            for col in &table.columns {
                let value = if col.primary_key && col.data_type.is_integral() {
                    json!(i + 1)
                } else if let Some((ref_table, ref_col)) = &col.references {
                    let pool: &[Row] = if *ref_table == table.name {
                        &out
                    } else {
                        existing.get(ref_table).map(Vec::as_slice).unwrap_or(&[])
                    };
                    pool.choose(&mut self.rng)
                        .and_then(|r| r.get(ref_col).cloned())
                        .unwrap_or(Value::Null)
                } else {
                    self.value(col, i)
                };
                row.insert(col.name.clone(), value);
            }
            out.push(row);
        }

        out
    }

    fn value(&mut self, col: &Column, index: usize) -> Value {
        if col.nullable && !col.primary_key && self.rng.gen_bool(NULL_RATE) {
            return Value::Null;
        }

        match col.data_type {
            DataType::Integer => json!(self.rng.gen_range(1..=1000)),
            DataType::BigInt => json!(self.rng.gen_range(1_000_000i64..=9_999_999_999)),
            DataType::Varchar => Value::String(self.short_text(&col.name, index)),
            DataType::Text => Value::String(format!(
                "This is sample text content for row {}. Lorem ipsum dolor sit amet.",
                index
            )),
            DataType::Boolean => Value::Bool(self.rng.r#gen()),
            DataType::Date => {
                let date = self.now - Duration::days(self.rng.gen_range(0..=365));
                Value::String(date.date().format("%Y-%m-%d").to_string())
            }
            DataType::DateTime | DataType::Timestamp => {
                let at = self.now - Duration::hours(self.rng.gen_range(0..=8760));
                Value::String(at.format("%Y-%m-%dT%H:%M:%S").to_string())
            }
            DataType::Decimal | DataType::Float => {
                let amount: f64 = self.rng.gen_range(10.0..1000.0);
                json!((amount * 100.0).round() / 100.0)
            }
            DataType::Json => json!({ "key": format!("value_{}", index), "index": index }),
            DataType::Uuid => {
                let bytes: [u8; 16] = self.rng.r#gen();
                Value::String(uuid::Builder::from_random_bytes(bytes).into_uuid().to_string())
            }
        }
    }

    fn short_text(&mut self, name: &str, index: usize) -> String {
        let name = name.to_lowercase();
        if name.contains("email") {
            format!("user{}@example.com", index)
        } else if name.contains("first") && name.contains("name") {
            self.pick(&FIRST_NAMES).to_string()
        } else if name.contains("last") && name.contains("name") {
            self.pick(&LAST_NAMES).to_string()
        } else if name.contains("name") {
            format!("{} {}", self.pick(&FIRST_NAMES), self.pick(&LAST_NAMES))
        } else if name.contains("phone") {
            format!(
                "+1-555-{}-{}",
                self.rng.gen_range(100..=999),
                self.rng.gen_range(1000..=9999)
            )
        } else if name.contains("title") {
            format!("Title {}", index + 1)
        } else {
            format!("value_{}", index)
        }
    }

    fn pick(&mut self, choices: &[&'static str]) -> &'static str {
        choices.choose(&mut self.rng).copied().unwrap_or_default()
    }
}

fn dependencies_met(table: &Table, data: &Dataset) -> bool {
    table.columns.iter().all(|c| match &c.references {
        Some((ref_table, _)) => *ref_table == table.name || data.contains_key(ref_table),
        None => true,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse;
    use crate::schema::Column;

    const SHOP: &str = "Create a orders table with total decimal. \
                        Create a customers table with first_name, email, and phone. \
                        Create a order_items table with quantity integer. \
                        Orders belongs to customers. \
                        Order_items belongs to orders.";

    fn ids(rows: &[Row], column: &str) -> Vec<Value> {
        rows.iter().map(|r| r[column].clone()).collect()
    }

    #[test]
    fn test_rows_per_table() {
        let schema = parse("Create a users table with name and email.");
        let data = Generator::seeded(7).generate(&schema, 5);

        assert_eq!(data["users"].len(), 5);
        assert!(data["users"].iter().all(|row| row.contains_key("name")));
        assert_eq!(ids(&data["users"], "id"), (1..=5).map(|i| json!(i)).collect::<Vec<_>>());
    }

    #[test]
    fn test_referenced_tables_first() {
        let schema = parse(SHOP);
        let data = Generator::seeded(1).generate(&schema, 4);

        let order: Vec<&str> = data.keys().map(String::as_str).collect();
        assert_eq!(order, vec!["customers", "orders", "order_items"]);
    }

    #[test]
    fn test_foreign_keys_point_at_generated_keys() {
        let schema = parse(SHOP);
        let data = Generator::seeded(42).generate(&schema, 8);

        for (table, rows) in &data {
            for col in &schema.table(table).unwrap().columns {
                let Some((target, target_col)) = &col.references else {
                    continue;
                };
                let pool = ids(&data[target], target_col);
                for row in rows {
                    let v = &row[&col.name];
                    assert!(v.is_null() || pool.contains(v), "{}.{} = {}", table, col.name, v);
                }
            }
        }
    }

    #[test]
    fn test_cycle_terminates() {
        let mut schema = Schema::default();
        let mut a = Table::new("a");
        a.add_column(Column::new("id", DataType::Integer).primary_key());
        a.add_column(Column::new("b_id", DataType::Integer).references("b", "id"));
        let mut b = Table::new("b");
        b.add_column(Column::new("id", DataType::Integer).primary_key());
        b.add_column(Column::new("a_id", DataType::Integer).references("a", "id"));
        schema.add_table(a);
        schema.add_table(b);

        let data = Generator::seeded(3).generate(&schema, 2);
        assert_eq!(data.len(), 2);
        assert!(data["a"].iter().all(|r| r["b_id"].is_null()));
    }

    #[test]
    fn test_self_reference_uses_earlier_rows() {
        let mut schema = Schema::default();
        let mut staff = Table::new("staff");
        staff.add_column(Column::new("id", DataType::Integer).primary_key());
        staff.add_column(Column::new("staff_id", DataType::Integer).references("staff", "id"));
        schema.add_table(staff);

        let data = Generator::seeded(9).generate(&schema, 6);
        let rows = &data["staff"];
        assert!(rows[0]["staff_id"].is_null());
        for (i, row) in rows.iter().enumerate().skip(1) {
            let manager = row["staff_id"].as_u64().unwrap() as usize;
            assert!(manager >= 1 && manager <= i);
        }
    }

    #[test]
    fn test_value_shapes() {
        let mut table = Table::new("profiles");
        table.add_column(Column::new("id", DataType::Integer).primary_key());
        for (name, data_type) in [
            ("email", DataType::Varchar),
            ("title", DataType::Varchar),
            ("born", DataType::Date),
            ("balance", DataType::Decimal),
            ("token", DataType::Uuid),
            ("extra", DataType::Json),
        ] {
            table.add_column(Column::new(name, data_type).not_null());
        }
        let mut schema = Schema::default();
        schema.add_table(table);

        let now = chrono::NaiveDate::from_ymd_opt(2024, 6, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        let data = Generator::seeded(5).with_now(now).generate(&schema, 3);
        let row = &data["profiles"][2];

        assert_eq!(row["email"], json!("user2@example.com"));
        assert_eq!(row["title"], json!("Title 3"));
        assert_eq!(row["born"].as_str().unwrap().len(), 10);
        assert!(row["born"].as_str().unwrap() <= "2024-06-01");
        let balance = row["balance"].as_f64().unwrap();
        assert!((10.0..=1000.0).contains(&balance));
        assert_eq!(row["token"].as_str().unwrap().len(), 36);
        assert_eq!(row["extra"]["index"], json!(2));
    }
}
