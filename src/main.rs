use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use lookat_camera::cli::Cli;
use lookat_camera::core::{GpuContext, GpuTransformSink, RecordingSink, ScriptedController};
use lookat_camera::{Camera, CameraConfig, Controller, TransformSink};

/// Run the camera for a fixed number of updates against one sink
fn run(camera: &mut Camera, controller: &dyn Controller, sink: &mut dyn TransformSink, frames: u32) -> Result<()> {
    for frame in 0..frames {
        camera
            .update(controller, sink)
            .with_context(|| format!("camera update failed at frame {}", frame))?;
    }
    Ok(())
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => CameraConfig::from_file(path)
            .with_context(|| format!("failed to load camera config {}", path.display()))?,
        None => CameraConfig::default(),
    };
    if let Some(fly) = cli.fly_override() {
        config.fly_enabled = fly;
    }

    let mut camera = Camera::from_config(&config).context("invalid camera configuration")?;
    let controller = ScriptedController::parse(&cli.keys).context("invalid --keys")?;

    info!(
        "Running {} update(s), fly {}, keys {:?}",
        cli.frames,
        if camera.fly_enabled() { "on" } else { "off" },
        controller.get_down_keys()
    );

    if cli.gpu {
        let context = pollster::block_on(GpuContext::new()).context("failed to create GPU context")?;
        let mut sink = GpuTransformSink::new(context);
        run(&mut camera, &controller, &mut sink, cli.frames)?;
    } else {
        let mut sink = RecordingSink::new();
        run(&mut camera, &controller, &mut sink, cli.frames)?;
        info!("Recorded {} transform uploads", sink.upload_count());
    }

    info!("Final eye {:?}, target {:?}", camera.eye(), camera.target());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&camera.snapshot())?);
    }

    Ok(())
}
