mod carousel;
mod models;
mod storage;
mod timer;
mod ui;

use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Instant;

use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::prelude::*;

use crate::storage::{load_deck, save_deck};
use crate::ui::{App, handle_key_event, handle_mouse_event, render};

/// 获取数据目录路径 (~/.local/share/zoumadeng/)
fn get_data_dir() -> io::Result<PathBuf> {
    let data_dir = dirs::data_dir()
        .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "无法获取用户数据目录"))?
        .join("zoumadeng");

    fs::create_dir_all(&data_dir)?;

    Ok(data_dir)
}

fn main() -> io::Result<()> {
    // 数据文件路径 (~/.local/share/zoumadeng/deck.toml)
    let data_path = get_data_dir()?.join("deck.toml");

    // 加载评价集，文件缺失时使用内置示例
    let deck = load_deck(&data_path)?;

    // 创建应用状态
    let mut app = App::new(deck, Instant::now());

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    // 保存数据（仅首次生成示例时有改动）
    save_deck(&mut app.deck, &data_path)?;
    println!("数据文件: {}", data_path.display());

    result
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        // poll 超时取最近的定时器截止时间，到期后由 on_tick 驱动轮播
        let timeout = app.tick_timeout(Instant::now());
        if event::poll(timeout)? {
            let quit = match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_key_event(app, key.code, Instant::now())?
                }
                Event::Mouse(mouse) => handle_mouse_event(app, mouse, Instant::now())?,
                _ => false,
            };
            if quit {
                break;
            }
        }

        app.on_tick(Instant::now());
    }
    Ok(())
}
