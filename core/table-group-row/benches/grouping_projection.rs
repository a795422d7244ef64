use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use serde_json::{json, Value};
use table_group_row::{
    table_columns_with_grouping, table_rows_with_grouping, Grouping, GroupingMode,
};
use table_view::{Column, TableColumn, TableRow};

fn wide_table(column_count: usize) -> Vec<Arc<TableColumn>> {
    (0..column_count)
        .map(|i| Arc::new(TableColumn::data(Column::new(format!("col{}", i)))))
        .collect()
}

fn grouping_every(step: usize, column_count: usize) -> Vec<Grouping> {
    (0..column_count)
        .step_by(step)
        .map(|i| Grouping::new(format!("col{}", i)))
        .collect()
}

fn bench_columns(c: &mut Criterion) {
    let columns = wide_table(1_000);
    let grouping = grouping_every(10, 1_000);
    let mut draft = grouping.clone();
    draft[0] = Grouping::draft("col0", GroupingMode::Remove);

    c.bench_function("columns_1000_grouped_100", |b| {
        b.iter(|| {
            table_columns_with_grouping(
                black_box(&columns),
                black_box(&grouping),
                black_box(&draft),
                20.0,
                |_| false,
            )
        })
    });
}

fn bench_rows(c: &mut Criterion) {
    let rows: Vec<Arc<TableRow<Value>>> = (0..10_000)
        .map(|i| {
            let payload = if i % 20 == 0 {
                json!({ "group": true, "groupedBy": "col0", "key": i })
            } else {
                json!({ "id": i })
            };
            Arc::new(TableRow::data(payload))
        })
        .collect();

    c.bench_function("rows_10000", |b| {
        b.iter(|| {
            table_rows_with_grouping(black_box(&rows), |row: &Value| {
                row.get("group").is_some()
            })
        })
    });
}

criterion_group!(benches, bench_columns, bench_rows);
criterion_main!(benches);
