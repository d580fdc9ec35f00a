//! Composes the sample living room and logs the derived scene.
//!
//! ```text
//! cargo run --example compose
//! RUST_LOG=roomgen=debug cargo run --example compose
//! ```

use std::time::Duration;

use roomgen::collaborators::{
    ImageGenerator, PromptEnhancer, RequestGate, StubImageGenerator, StubPromptEnhancer,
};
use roomgen::operations::AnalyzeLayout;
use roomgen::plan::FloorPlan;
use roomgen::scene::{SceneParams, SceneStore};
use roomgen::tessellation::TessellateRoom;
use tracing::{error, info};

const SAMPLE_PLAN: &str = r#"{
    "units": "cm",
    "rooms": [
        {
            "id": "room-1",
            "name": "Living Room",
            "polygon": [[0, 0], [500, 0], [500, 400], [0, 400]],
            "height": 300
        }
    ],
    "openings": [],
    "furniture": []
}"#;

#[tokio::main(flavor = "current_thread")]
async fn main() -> roomgen::Result<()> {
    // Default: WARN for everything, INFO for roomgen.
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("compose=info".parse().unwrap_or_default())
        .add_directive("roomgen=info".parse().unwrap_or_default());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let plan = FloorPlan::from_json(SAMPLE_PLAN)?;

    let mut store = SceneStore::new();
    let report = store.load_floor_plan(&plan, SceneParams::default());
    if let Some(err) = &report.plan_error {
        error!(error = %err, "floor plan rejected");
    }
    for (room, err) in &report.failures {
        error!(room = %room, error = %err, "room skipped");
    }

    for (_, group) in store.groups() {
        info!(
            room = %group.name,
            width = group.floor.width,
            depth = group.floor.depth,
            "floor"
        );
        for (i, wall) in group.walls.iter().enumerate() {
            info!(
                index = i,
                x = wall.center.x,
                y = wall.center.y,
                z = wall.center.z,
                rotation = wall.rotation_y,
                length = wall.length(),
                "wall"
            );
        }
        let mesh = TessellateRoom::new(group).execute();
        info!(
            floor = mesh.floor.triangle_count(),
            walls = mesh.walls.triangle_count(),
            furniture = mesh.furniture.triangle_count(),
            "triangles"
        );
    }

    for suggestion in AnalyzeLayout::new(&plan).execute()? {
        info!(kind = ?suggestion.kind, "{suggestion}");
    }

    let gate = RequestGate::new();
    let enhancer = StubPromptEnhancer::with_delay(Duration::from_millis(200));
    let generator = StubImageGenerator::with_delay(Duration::from_millis(300));
    match gate.run(enhancer.enhance_prompt("warm minimalist living room")).await {
        Ok(prompt) => {
            info!(%prompt, "enhanced prompt");
            match generator.generate_top_view(&prompt).await {
                Ok(image) => info!(url = %image.url, "top view"),
                Err(err) => error!(error = %err, "top view generation failed"),
            }
        }
        Err(err) => error!(error = %err, "prompt enhancement failed"),
    }

    Ok(())
}
