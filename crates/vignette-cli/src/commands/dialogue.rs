use anyhow::Result;

use vignette_core::dialogue::tokenize;
use vignette_core::layout::{layout, LayoutStyle, MonospaceMeasure};
use vignette_core::AppConfig;

pub async fn run(config: &AppConfig, offline: bool, width: Option<f64>) -> Result<()> {
    let data = super::load_chat_data(config, offline).await;

    let style = LayoutStyle {
        max_line_width: width.unwrap_or(config.chat.max_line_width),
        line_height: config.chat.line_height,
        image_size: config.chat.image_size,
    };
    let measure = MonospaceMeasure::new(config.chat.char_width);
    let emoji_names = data.emoji_names();

    println!(
        "Dialogue ({} lines, {} emojis, {} avatars):\n",
        data.dialogue.len(),
        data.emojies.len(),
        data.avatars.len()
    );

    for line in &data.dialogue {
        let tokens = tokenize(&line.text, &emoji_names);
        let block = layout(&tokens, &style, &measure);
        let avatar = if data.avatar(&line.name).is_some() {
            ""
        } else {
            " (no avatar)"
        };

        println!("  {}{} [{}x{}]", line.name, avatar, block.width, block.height);
        for text in block.line_texts() {
            println!("    | {}", text.trim_end());
        }
        println!();
    }

    Ok(())
}
