use criterion::{black_box, criterion_group, criterion_main, Criterion};
use stroud::mesh::{TriangleMesh, TriangleMeshBuilder};
use stroud::{IntegrationOptions, StroudIntegrator};

/// Unit square split into 2 n^2 triangles.
fn unit_square(n: usize) -> TriangleMesh<f64> {
    let mut b = TriangleMeshBuilder::new_with_capacity((n + 1) * (n + 1), 2 * n * n);
    let h = 1.0 / n as f64;
    for j in 0..=n {
        for i in 0..=n {
            b.add_point(j * (n + 1) + i, [i as f64 * h, j as f64 * h]);
        }
    }
    for j in 0..n {
        for i in 0..n {
            let v0 = j * (n + 1) + i;
            let v1 = v0 + 1;
            let v2 = v0 + n + 2;
            let v3 = v0 + n + 1;
            b.add_cell(2 * (j * n + i), [v0, v1, v2]);
            b.add_cell(2 * (j * n + i) + 1, [v0, v2, v3]);
        }
    }
    b.create_mesh().unwrap()
}

pub fn integration_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("integration");
    group.sample_size(20);

    let mesh = unit_square(100);
    let g = |x: f64, y: f64| (x * y).sin() + x * x;

    for order in [2, 5, 10] {
        let integrator = StroudIntegrator::new(IntegrationOptions {
            order,
            ..Default::default()
        });
        group.bench_function(
            format!(
                "Integration over {} cells with order {order}",
                mesh.number_of_cells()
            ),
            |b| b.iter(|| black_box(integrator.integrate(&mesh, &g).unwrap())),
        );
        group.bench_function(
            format!(
                "Node generation on {} cells with order {order}",
                mesh.number_of_cells()
            ),
            |b| b.iter(|| black_box(integrator.generate_nodes(&mesh).unwrap())),
        );
    }
    group.finish();
}

criterion_group!(benches, integration_benchmark);
criterion_main!(benches);
