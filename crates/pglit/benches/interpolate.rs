use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use pglit::{Value, args, interpolate};

/// Build a template with `n` placeholders and matching integer arguments:
/// SELECT * FROM t WHERE col0 = $1 AND col1 = $2 ...
fn build_select(n: usize) -> (String, Vec<Value>) {
    let mut sql = String::from("SELECT * FROM t WHERE ");
    let mut args = Vec::with_capacity(n);
    for i in 0..n {
        if i > 0 {
            sql.push_str(" AND ");
        }
        sql.push_str(&format!("col{i} = ${}", i + 1));
        args.push(Value::from(i as i64));
    }
    (sql, args)
}

fn bench_ints(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate/ints");

    for n in [1, 5, 10, 50, 100] {
        let input = build_select(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &input, |b, (sql, args)| {
            b.iter(|| black_box(interpolate(sql, args)));
        });
    }

    group.finish();
}

fn bench_strings(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate/strings");

    for len in [8, 64, 512, 4096] {
        let text: String = "it's ".chars().cycle().take(len).collect();
        let args = args![text];
        group.bench_with_input(BenchmarkId::from_parameter(len), &args, |b, args| {
            b.iter(|| black_box(interpolate("SELECT * FROM t WHERE name = $1", args)));
        });
    }

    group.finish();
}

fn bench_in_list(c: &mut Criterion) {
    let mut group = c.benchmark_group("interpolate/in_list");

    for n in [5, 20, 100, 500] {
        let args = args![(0..n).collect::<Vec<i64>>()];
        group.bench_with_input(BenchmarkId::from_parameter(n), &args, |b, args| {
            b.iter(|| black_box(interpolate("SELECT * FROM t WHERE id IN $1", args)));
        });
    }

    group.finish();
}

fn bench_mixed(c: &mut Criterion) {
    let args = args![1, "wat", 2, "hi", 3, vec![1, 2, 3], 1, 2, 7, 8];
    let sql = "SELECT DISTINCT a, b, z, y, x FROM c WHERE (d = $1 OR e = $2) AND f = $3 AND x = $4 \
               AND g = $5 AND h IN $6 GROUP BY i, ii, iii HAVING (j = k) AND (jj = $7) AND (jjj = $8) \
               ORDER BY l, l, l LIMIT $9 OFFSET $10";

    c.bench_function("interpolate/mixed", |b| {
        b.iter(|| black_box(interpolate(sql, &args)));
    });
}

criterion_group!(benches, bench_ints, bench_strings, bench_in_list, bench_mixed);
criterion_main!(benches);
