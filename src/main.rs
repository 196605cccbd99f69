#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{
    tao::{dpi::LogicalSize, window::WindowBuilder},
    Config as DesktopConfig,
};

use crate::util::version::{version_label, APP_NAME};

#[cfg(feature = "desktop")]
fn desktop_config() -> DesktopConfig {
    // Some Wayland compositors crash WebKit's DMABUF renderer.
    if std::env::var_os("WAYLAND_DISPLAY").is_some()
        && std::env::var_os("WEBKIT_DISABLE_DMABUF_RENDERER").is_none()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(format!("{APP_NAME} {}", version_label()))
            .with_inner_size(LogicalSize::new(1180.0, 860.0)),
    )
}

fn main() {
    let builder = LaunchBuilder::new();

    #[cfg(feature = "desktop")]
    let builder = builder.with_cfg(desktop! { desktop_config() });

    builder.launch(app::App);
}
