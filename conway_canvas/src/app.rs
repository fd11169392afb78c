// app.rs - Application state shared by the egui front end (see ui.rs)

use eframe::Storage;
use serde::{Deserialize, Serialize};

use crate::brush::Brush;
use crate::config::Config;
use crate::error::LifeError;
use crate::render::Palette;
use crate::simulation::Simulation;
use crate::storage::{self, PatternName};
use crate::ticker::Tick;

pub const NOT_FOUND_NOTICE: &str = "Pattern not found.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Save,
    Load,
}

impl PromptKind {
    pub fn title(self) -> &'static str {
        match self {
            PromptKind::Save => "Save pattern",
            PromptKind::Load => "Load pattern",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            PromptKind::Save => "Enter a name for your pattern:",
            PromptKind::Load => "Enter the name of the pattern to load:",
        }
    }
}

/// An open name prompt.
#[derive(Debug, Clone)]
pub struct Prompt {
    pub kind: PromptKind,
    pub name: String,
    pub focused: bool,
}

/// Speed and colors, kept between runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub speed: u32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
}

impl Settings {
    fn from_config(config: &Config) -> Self {
        Self {
            speed: config.initial_speed,
            live_color: config.live_color,
            dead_color: config.dead_color,
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

pub struct ConwayApp {
    pub config: Config,
    pub sim: Simulation,
    pub brush: Brush,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub prompt: Option<Prompt>,
    pub notice: Option<String>,
}

impl ConwayApp {
    /// Restores persisted settings when eframe provides storage.
    pub fn new(cc: &eframe::CreationContext<'_>, config: Config) -> Self {
        let mut app = Self::with_config(config);
        if let Some(storage) = cc.storage {
            if let Some(settings) = eframe::get_value::<Settings>(storage, eframe::APP_KEY) {
                log::debug!("restored settings: {settings:?}");
                app.apply_settings(settings);
            }
        }
        app
    }

    pub fn with_config(config: Config) -> Self {
        let sim = Simulation::new(&config);
        Self {
            live_color: config.live_color,
            dead_color: config.dead_color,
            sim,
            brush: Brush::default(),
            prompt: None,
            notice: None,
            config,
        }
    }

    pub fn settings(&self) -> Settings {
        Settings {
            speed: self.sim.speed(),
            live_color: self.live_color,
            dead_color: self.dead_color,
        }
    }

    pub fn apply_settings(&mut self, settings: Settings) {
        self.sim.set_speed(settings.speed);
        self.live_color = settings.live_color;
        self.dead_color = settings.dead_color;
    }

    pub fn palette(&self) -> Palette {
        Palette::from_rgb(self.live_color, self.dead_color, self.config.border_color)
    }

    pub fn resolution(&self) -> f32 {
        self.config.resolution as f32
    }

    /// A modal dialog is open; the surface ignores the pointer meanwhile.
    pub fn is_modal(&self) -> bool {
        self.prompt.is_some() || self.notice.is_some()
    }

    /// Polls the frame gate once per frame. An open dialog holds the run
    /// where it is; generations resume once it is dismissed.
    pub fn frame_tick(&mut self, now_ms: f64) -> Tick {
        if !self.is_modal() {
            return self.sim.tick(now_ms);
        }
        if self.sim.is_running() {
            Tick::Wait(self.sim.interval())
        } else {
            Tick::Idle
        }
    }

    pub fn open_prompt(&mut self, kind: PromptKind) {
        self.brush.release();
        self.prompt = Some(Prompt {
            kind,
            name: String::new(),
            focused: false,
        });
    }

    pub fn cancel_prompt(&mut self) {
        self.prompt = None;
    }

    /// Runs the save or load the open prompt asks for.
    pub fn submit_prompt(&mut self, storage: &mut dyn Storage) {
        let Some(prompt) = self.prompt.take() else {
            return;
        };
        match prompt.kind {
            PromptKind::Save => self.save_pattern(storage, &prompt.name),
            PromptKind::Load => self.load_pattern(storage, &prompt.name),
        }
    }

    /// eframe gave us no storage (persistence disabled on this platform).
    pub fn storage_unavailable(&mut self) {
        self.prompt = None;
        log::warn!("no persistent storage available");
        self.notice = Some("Pattern storage is unavailable.".to_owned());
    }

    /// An empty name does nothing.
    pub fn save_pattern(&mut self, storage: &mut dyn Storage, raw_name: &str) {
        let name = match PatternName::parse(raw_name) {
            Ok(name) => name,
            Err(err) => return self.reject_name(err),
        };
        self.notice = Some(match storage::save_pattern(storage, &name, self.sim.grid()) {
            Ok(()) => format!("Pattern \"{name}\" saved!"),
            Err(err) => {
                log::warn!("saving pattern \"{name}\" failed: {err}");
                err.to_string()
            }
        });
    }

    /// The grid is only replaced when the stored pattern decodes and fits.
    pub fn load_pattern(&mut self, storage: &dyn Storage, raw_name: &str) {
        let name = match PatternName::parse(raw_name) {
            Ok(name) => name,
            Err(err) => return self.reject_name(err),
        };
        let loaded =
            storage::load_pattern(storage, &name).and_then(|grid| self.sim.replace_grid(grid));
        self.notice = Some(match loaded {
            Ok(()) => format!("Pattern \"{name}\" loaded!"),
            Err(LifeError::PatternNotFound { .. }) => NOT_FOUND_NOTICE.to_owned(),
            Err(err) => {
                log::warn!("loading pattern \"{name}\" failed: {err}");
                err.to_string()
            }
        });
    }

    fn reject_name(&mut self, err: LifeError) {
        if matches!(err, LifeError::EmptyName) {
            return;
        }
        log::warn!("rejected pattern name: {err}");
        self.notice = Some(err.to_string());
    }
}
