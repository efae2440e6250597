//! FILENAME: core/pivot-layout/benches/header_spans.rs
//! Span and visibility cost on a wide three-level row axis.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pivot_layout::{Axis, Dimension, DimensionField, DimensionId, HeaderId, HeaderKind, HeaderTree};

/// Builds `countries` x `regions` x `cities` rows with sub-totals on the
/// two outer levels. Returns the tree and the outer headers.
fn build_tree(
    countries: u32,
    regions: u32,
    cities: u32,
) -> (HeaderTree, Vec<HeaderId>, Vec<HeaderId>) {
    let country_field = DimensionField::new("Country");
    let region_field = DimensionField::new("Region");
    let city_field = DimensionField::new("City");
    let mut tree = HeaderTree::new();
    let mut next_id = 0;
    let mut dim_id = || {
        next_id += 1;
        DimensionId(next_id)
    };
    let mut outer = Vec::new();
    let mut subtotals = Vec::new();

    for c in 0..countries {
        let country = Dimension::new(dim_id(), format!("Country {}", c), 3, country_field.clone());
        let country_total = tree
            .add_header(Axis::Rows, Some(HeaderKind::SubTotal), country.clone(), None, 1, None)
            .unwrap();
        let country_id = tree
            .add_header(Axis::Rows, None, country, None, 1, Some(country_total))
            .unwrap();
        outer.push(country_id);
        subtotals.push(country_total);

        for r in 0..regions {
            let region = Dimension::new(dim_id(), format!("Region {}", r), 2, region_field.clone());
            let region_total = tree
                .add_header(
                    Axis::Rows,
                    Some(HeaderKind::SubTotal),
                    region.clone(),
                    Some(country_id),
                    1,
                    None,
                )
                .unwrap();
            let region_id = tree
                .add_header(Axis::Rows, None, region, Some(country_id), 1, Some(region_total))
                .unwrap();
            subtotals.push(region_total);

            for i in 0..cities {
                let city = Dimension::new(dim_id(), format!("City {}", i), 1, city_field.clone());
                tree.add_header(Axis::Rows, None, city, Some(region_id), 1, None).unwrap();
            }
        }
    }

    (tree, outer, subtotals)
}

fn bench_spans(c: &mut Criterion) {
    let mut group = c.benchmark_group("vspan");
    for &width in &[10u32, 50, 100] {
        let (tree, outer, _) = build_tree(width, 10, 10);
        group.bench_with_input(BenchmarkId::from_parameter(width), &width, |b, _| {
            b.iter(|| outer.iter().map(|&id| tree.vspan(black_box(id))).sum::<u32>())
        });
    }
    group.finish();
}

fn bench_visible_after_toggle(c: &mut Criterion) {
    let (mut tree, _, subtotals) = build_tree(50, 10, 10);
    c.bench_function("toggle_then_visible_headers", |b| {
        let mut i = 0;
        b.iter(|| {
            let target = subtotals[i % subtotals.len()];
            i += 1;
            tree.toggle(target);
            black_box(tree.visible_headers(Axis::Rows).len())
        })
    });
}

criterion_group!(benches, bench_spans, bench_visible_after_toggle);
criterion_main!(benches);
