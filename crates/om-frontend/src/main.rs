//! Orbit menu storefront entry point

use om_core::Catalog;

fn main() -> eframe::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "om_frontend=debug,om_renderer=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Orbit Menu");

    // An optional RON catalog path; without one the demo items show.
    let catalog = match std::env::args().nth(1) {
        Some(path) => match Catalog::load(&path) {
            Ok(catalog) => {
                tracing::info!(path, items = catalog.items.len(), "loaded catalog");
                catalog
            }
            Err(error) => {
                tracing::error!(path, %error, "failed to load catalog, using demo items");
                om_frontend::demo::demo_catalog()
            }
        },
        None => om_frontend::demo::demo_catalog(),
    };

    let wgpu_options = egui_wgpu::WgpuConfiguration {
        wgpu_setup: egui_wgpu::WgpuSetup::CreateNew(egui_wgpu::WgpuSetupCreateNew {
            instance_descriptor: wgpu::InstanceDescriptor {
                backends: wgpu::Backends::all(),
                ..Default::default()
            },
            power_preference: wgpu::PowerPreference::default(),
            device_descriptor: std::sync::Arc::new(|adapter| wgpu::DeviceDescriptor {
                label: Some("om device"),
                required_features: wgpu::Features::empty(),
                required_limits: adapter.limits(),
                memory_hints: wgpu::MemoryHints::default(),
                trace: wgpu::Trace::Off,
                ..Default::default()
            }),
            ..Default::default()
        }),
        ..Default::default()
    };

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 800.0])
            .with_min_inner_size([640.0, 480.0])
            .with_title("Orbit Menu"),
        wgpu_options,
        ..Default::default()
    };

    eframe::run_native(
        "om",
        native_options,
        Box::new(|cc| Ok(Box::new(om_frontend::StorefrontApp::new(cc, catalog)))),
    )
}
