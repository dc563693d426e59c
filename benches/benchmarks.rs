criterion::criterion_main!(benches);
criterion::criterion_group! {
    name = benches;
    config = criterion::Criterion::default()
        .without_plots()
        .noise_threshold(3.0)
        .significance_level(0.01)
        .sample_size(10)
        .measurement_time(std::time::Duration::from_secs(1));
    targets =
        formatting_centroid_report,
        recording_figure_panels,
        drawing_figure_svg,
}

use kmeans_report::*;

fn fixture(k: usize) -> (Clustering, Grouping) {
    let grouping = Grouping::random();
    let clustering = Clustering::sample(k, grouping.dims(), 4096).expect("positive k");
    (clustering, grouping)
}

fn formatting_centroid_report(c: &mut criterion::Criterion) {
    let (clustering, grouping) = fixture(128);
    c.bench_function("format a 128-cluster Report", |b| {
        b.iter(|| {
            Report::new(&clustering, &grouping)
                .expect("aligned grouping")
                .raw_labels(true)
                .to_string()
        })
    });
}

fn recording_figure_panels(c: &mut criterion::Criterion) {
    let (clustering, grouping) = fixture(128);
    let renderer = Renderer::from(Options::default().plot(true));
    c.bench_function("record a 128-cluster Figure", |b| {
        b.iter(|| {
            let mut figure = Figure::default();
            renderer
                .render(&clustering, &grouping, &mut std::io::sink(), &mut figure)
                .expect("aligned grouping");
            figure
        })
    });
}

fn drawing_figure_svg(c: &mut criterion::Criterion) {
    use plotters::prelude::*;
    let (clustering, grouping) = fixture(16);
    let mut figure = Figure::default();
    Renderer::from(Options::default().plot(true))
        .render(&clustering, &grouping, &mut std::io::sink(), &mut figure)
        .expect("aligned grouping");
    c.bench_function("draw a 16-cluster Figure to SVG", |b| {
        b.iter(|| {
            let mut svg = String::new();
            {
                let root = SVGBackend::with_string(&mut svg, (FIGURE_WIDTH, FIGURE_HEIGHT))
                    .into_drawing_area();
                figure.draw(&root).expect("draw");
            }
            svg
        })
    });
}
