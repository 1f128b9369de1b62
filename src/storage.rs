use std::fs;
use std::io;
use std::path::Path;

use crate::models::{Deck, DeckData};

/// 从 TOML 文件加载评价集；文件不存在时回退到内置示例
pub fn load_deck(path: &Path) -> io::Result<Deck> {
    if !path.exists() {
        return Ok(Deck::sample());
    }

    let content = fs::read_to_string(path)?;
    let data: DeckData =
        toml::from_str(&content).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    Ok(Deck::from_data(data))
}

/// 保存评价集到 TOML 文件（仅在有改动时写盘）
pub fn save_deck(deck: &mut Deck, path: &Path) -> io::Result<()> {
    if !deck.dirty {
        return Ok(());
    }

    let data = deck.to_data();
    let content =
        toml::to_string_pretty(&data).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

    fs::write(path, content)?;

    deck.dirty = false;
    Ok(())
}
