use anyhow::{bail, Result};

use vignette_core::scene::ActiveScene;
use vignette_core::{AppConfig, ChatData, SceneKind, SceneManager};

/// Step a scene at a fixed rate and print a line per simulated second
pub fn run(config: AppConfig, kind: SceneKind, frames: u32, fps: u32) -> Result<()> {
    if fps == 0 {
        bail!("--fps must be greater than zero");
    }
    let delta = 1.0 / fps as f64;

    let mut manager = SceneManager::new(config, ChatData::fallback());
    manager.change_scene(kind)?;

    println!("Simulating {} for {} frames at {} fps\n", kind.title(), frames, fps);

    for frame in 1..=frames {
        manager.advance(delta);
        if frame % fps == 0 || frame == frames {
            let seconds = frame as f64 * delta;
            if let Some(scene) = manager.active() {
                println!("  {:>6.2}s  {}", seconds, summary(scene));
            }
        }
    }

    manager.dispose();
    Ok(())
}

fn summary(scene: &ActiveScene) -> String {
    match scene {
        ActiveScene::Cards(cards) => format!(
            "stacks {:?}, in flight {}, moves {}",
            cards.stack_sizes(),
            cards.cards_in_flight(),
            cards.moves()
        ),
        ActiveScene::Chat(chat) => format!(
            "messages {}, shown {}/{}",
            chat.messages().len(),
            chat.shown(),
            chat.data().dialogue.len()
        ),
        ActiveScene::Fire(fire) => format!(
            "particles {}/{}, spawned {}, dropped {}",
            fire.particle_count(),
            fire.capacity(),
            fire.spawned(),
            fire.dropped()
        ),
    }
}
