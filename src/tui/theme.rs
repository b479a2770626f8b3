// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Printcal-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Printcal and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


use std::env;

use ratatui::style::{Color, Modifier, Style};
use thiserror::Error;

use crate::interaction::StatusLight;

const PALETTE_ENV: &str = "PRINTCAL_PALETTE";

#[derive(Debug, Clone, Default)]
pub(crate) struct TuiTheme {
    palette: Option<TuiPalette>,
}

impl TuiTheme {
    pub(crate) fn from_env() -> Result<Self, ThemeError> {
        match env::var(PALETTE_ENV) {
            Ok(value) if !value.trim().is_empty() => {
                let palette = TuiPalette::parse_csv(value.trim()).map_err(|reason| {
                    ThemeError::InvalidEnv { name: PALETTE_ENV, value: format!("{} ({reason})", value.trim()) }
                })?;
                Ok(Self { palette: Some(palette) })
            }
            Ok(_) | Err(env::VarError::NotPresent) => Ok(Self::default()),
            Err(env::VarError::NotUnicode(_)) => {
                Err(ThemeError::InvalidEnv { name: PALETTE_ENV, value: "<non-unicode>".to_owned() })
            }
        }
    }

    pub(crate) fn base_style(&self) -> Style {
        match &self.palette {
            Some(palette) => Style::default().fg(palette.fg).bg(palette.bg),
            None => Style::default(),
        }
    }

    fn accent(&self) -> Color {
        self.palette.as_ref().map_or(Color::Yellow, |p| p.accent)
    }

    pub(crate) fn panel_border_style(&self, focused: bool) -> Style {
        if focused {
            self.base_style().fg(self.accent())
        } else {
            self.base_style()
        }
    }

    pub(crate) fn selection_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::REVERSED | Modifier::BOLD)
    }

    pub(crate) fn marked_style(&self) -> Style {
        self.base_style().fg(self.accent()).add_modifier(Modifier::BOLD)
    }

    pub(crate) fn muted_style(&self) -> Style {
        self.base_style().fg(Color::DarkGray)
    }

    pub(crate) fn today_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::UNDERLINED | Modifier::BOLD)
    }

    pub(crate) fn orphan_style(&self) -> Style {
        self.base_style().add_modifier(Modifier::ITALIC).fg(Color::Gray)
    }

    pub(crate) fn light_style(&self, light: StatusLight) -> Style {
        let color = match (&self.palette, light) {
            (_, StatusLight::Idle) => Color::DarkGray,
            (Some(p), StatusLight::Pending) => p.pending,
            (Some(p), StatusLight::Ok) => p.ok,
            (Some(p), StatusLight::Failed) => p.failed,
            (None, StatusLight::Pending) => Color::Yellow,
            (None, StatusLight::Ok) => Color::Green,
            (None, StatusLight::Failed) => Color::Red,
        };
        self.base_style().fg(color)
    }
}

/// `fg,bg,accent,ok,pending,failed` as `#RRGGBB` colors.
#[derive(Debug, Clone, PartialEq, Eq)]
struct TuiPalette {
    fg: Color,
    bg: Color,
    accent: Color,
    ok: Color,
    pending: Color,
    failed: Color,
}

impl TuiPalette {
    fn parse_csv(value: &str) -> Result<Self, String> {
        let colors = value
            .split(',')
            .map(parse_hex_color)
            .collect::<Result<Vec<_>, _>>()?;
        let &[fg, bg, accent, ok, pending, failed] = colors.as_slice() else {
            return Err(format!(
                "expected 6 comma-separated colors (fg,bg,accent,ok,pending,failed), got {}",
                colors.len()
            ));
        };
        Ok(Self { fg, bg, accent, ok, pending, failed })
    }
}

fn parse_hex_color(value: &str) -> Result<Color, String> {
    let trimmed = value.trim();
    let hex = trimmed.strip_prefix('#').unwrap_or(trimmed);
    if hex.len() != 6 || !hex.chars().all(|ch| ch.is_ascii_hexdigit()) {
        return Err(format!("invalid hex color: {trimmed} (expected #RRGGBB)"));
    }
    let rgb = u32::from_str_radix(hex, 16).map_err(|_| format!("invalid hex color: {trimmed}"))?;
    Ok(Color::Rgb((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8))
}

#[derive(Debug, Clone, Error)]
pub(crate) enum ThemeError {
    #[error("invalid env {name}={value}")]
    InvalidEnv { name: &'static str, value: String },
}
