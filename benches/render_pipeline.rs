use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use fractal_viewer::{
    Complex, ExplorerConfig, FractalKinds, PixelBuffer, Point, RenderMode, ViewCommand, ViewState,
    render,
};

fn zoomed_view(fractal: FractalKinds, config: &ExplorerConfig) -> ViewState {
    let mut view = ViewState::new(fractal, config);
    let cursor = Point {
        x: config.width / 3,
        y: config.height / 2,
    };
    for _ in 0..20 {
        view.apply(ViewCommand::ZoomIn { cursor }, config);
    }
    view
}

fn bench_render(c: &mut Criterion) {
    let config = ExplorerConfig::default();
    let fractals = [
        FractalKinds::Mandelbrot,
        FractalKinds::Julia {
            constant: Complex::new(-0.8, 0.156),
        },
    ];

    let mut group = c.benchmark_group("render_frame");
    group.sample_size(20);

    for fractal in fractals {
        let view = zoomed_view(fractal, &config);

        for mode in [RenderMode::Sequential, RenderMode::Parallel] {
            let mut buffer = PixelBuffer::new(config.width, config.height).unwrap();
            let id = BenchmarkId::new(fractal.display_name(), format!("{:?}", mode));

            group.bench_function(id, |b| {
                b.iter(|| render(black_box(&view), &config, &mut buffer, mode));
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
