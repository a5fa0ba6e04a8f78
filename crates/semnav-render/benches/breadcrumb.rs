//! Benchmarks for navigation rendering.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use semnav_render::{HtmlMarkup, RenderOptions, Style, render};
use semnav_tree::{CurrentPath, Items, Navigation, NavigationBuilder};

/// Build a navigation with specified depth and breadth.
///
/// Item ids encode their position, e.g. `0-2-1`; targets are `/0/2/1`.
fn create_navigation(depth: usize, breadth: usize) -> Navigation {
    fn add_level(items: &mut Items, prefix: &str, current_depth: usize, depth: usize, breadth: usize) {
        for i in 0..breadth {
            let id = if prefix.is_empty() {
                i.to_string()
            } else {
                format!("{prefix}-{i}")
            };
            let target = format!("/{}", id.replace('-', "/"));
            if current_depth < depth {
                items.branch(&id, &id, &target, |nested| {
                    add_level(nested, &id, current_depth + 1, depth, breadth);
                });
            } else {
                items.item(&id, &id, &target);
            }
        }
    }

    let mut builder = NavigationBuilder::new("bench");
    builder.branch("root", "Root", "/", |items| add_level(items, "", 1, depth, breadth));
    builder.build().unwrap()
}

fn deepest_target(depth: usize) -> String {
    let mut target = String::new();
    for _ in 0..depth {
        target.push_str("/0");
    }
    target
}

fn bench_mark_active(c: &mut Criterion) {
    let mut group = c.benchmark_group("mark_active");

    for (depth, breadth) in [(3, 5), (5, 3), (8, 2)] {
        let nav = create_navigation(depth, breadth);
        let current = CurrentPath::new(&deepest_target(depth));
        group.bench_with_input(
            BenchmarkId::new("tree", format!("{depth}x{breadth}")),
            &nav,
            |b, nav| {
                b.iter(|| {
                    let mut nav = nav.clone();
                    nav.mark_active(&current);
                    nav
                });
            },
        );
    }

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let markup = HtmlMarkup::default();
    let options = RenderOptions::default();
    let mut group = c.benchmark_group("render");

    for (depth, breadth) in [(3, 5), (5, 3), (8, 2)] {
        let mut nav = create_navigation(depth, breadth);
        nav.mark_active(&CurrentPath::new(&deepest_target(depth)));

        group.bench_with_input(
            BenchmarkId::new("breadcrumb", format!("{depth}x{breadth}")),
            &nav,
            |b, nav| b.iter(|| render(nav, Style::Breadcrumb, &markup, &options)),
        );
        group.bench_with_input(
            BenchmarkId::new("list", format!("{depth}x{breadth}")),
            &nav,
            |b, nav| b.iter(|| render(nav, Style::List, &markup, &options)),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_mark_active, bench_render);
criterion_main!(benches);
