#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")] // hide console window on Windows in release
#![allow(unsafe_code)]
#![allow(clippy::undocumented_unsafe_blocks)]

use eframe::{egui, egui_glow, glow};
use egui::mutex::Mutex;
use egui::panel::Side;
use egui::{Color32, Id};
use clap::Parser;
use std::sync::Arc;
use thiserror::Error;

mod config;
mod file_formats;
mod gfx;
mod logging;
mod viewer;

use config::{Args, ViewerConfig};
use file_formats::{load_vertices, take_vertices};
use gfx::mesh::MeshError;
use gfx::shader::ShaderError;
use gfx::transform::{aspect_ratio, TransformComposer};
use gfx::{Model, Shader, Vertex};
use viewer::{Flow, KeyBindings, Scene};

const BG_COLOR: Color32 = Color32::from_rgb(10, 10, 10);

#[derive(Debug, Error)]
enum StartupError {
    #[error("eframe was not started with the glow backend")]
    NoGlContext,

    #[error(transparent)]
    Shader(#[from] ShaderError),

    #[error(transparent)]
    Mesh(#[from] MeshError),
}

fn main() -> eframe::Result {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            clap::error::ErrorKind::DisplayHelp | clap::error::ErrorKind::DisplayVersion => {
                e.exit()
            }
            _ => {
                println!("{e}");
                std::process::exit(1);
            }
        },
    };
    let config = ViewerConfig::from(args);
    logging::init_logging(config.logging.clone());

    let verts = match load_vertices(&config.vertex_file)
        .and_then(|verts| take_vertices(verts, config.vertex_count))
    {
        Ok(verts) => verts,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };
    log::info!(
        "{}: drawing {} vertices ({:?}, {:?})",
        config.vertex_file.display(),
        verts.len(),
        config.composer.projection,
        config.composer.model_binding,
    );

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_resizable(false),
        depth_buffer: 24,

        renderer: eframe::Renderer::Glow,
        ..Default::default()
    };

    let composer = config.composer;
    eframe::run_native(
        "Orbit Viewer",
        options,
        Box::new(move |cc| Ok(Box::new(ViewerApp::new(cc, verts, composer)?))),
    )
}

struct ViewerApp {
    /// Behind an `Arc<Mutex<…>>` so we can pass it to [`egui::PaintCallback`] and paint later.
    scene: Arc<Mutex<Scene>>,
    shader: Shader,
    bindings: KeyBindings,
}

impl ViewerApp {
    fn new(
        cc: &eframe::CreationContext<'_>,
        verts: Vec<Vertex>,
        composer: TransformComposer,
    ) -> Result<Self, StartupError> {
        let gl = cc.gl.as_ref().ok_or(StartupError::NoGlContext)?;

        let shader = Shader::default_program(gl)?;
        log::info!("shader program compiled");

        let mut scene = Scene::new(verts, composer);
        if let Err(e) = scene.setup_gl(gl, &shader) {
            shader.destroy(gl);
            return Err(e.into());
        }

        Ok(Self {
            scene: Arc::new(Mutex::new(scene)),
            shader,
            bindings: KeyBindings::default(),
        })
    }
}

impl eframe::App for ViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        egui::SidePanel::new(Side::Left, Id::new("Control Panel")).show(ctx, |ui| {
            self.status_ui(ui);
        });
        egui::CentralPanel::default().show(ctx, |ui| {
            egui::Frame::canvas(ui.style())
                .fill(BG_COLOR)
                .show(ui, |ui| {
                    self.custom_painting(ui);
                });
        });
        ctx.request_repaint();
    }

    fn on_exit(&mut self, gl: Option<&glow::Context>) {
        if let Some(gl) = gl {
            self.scene.lock().destroy_gl(gl);
            self.shader.destroy(gl);
        }
    }
}

impl ViewerApp {
    fn handle_input(&mut self, ctx: &egui::Context) {
        let actions = ctx.input(|i| self.bindings.actions(&i.events));
        if actions.is_empty() {
            return;
        }

        let mut scene = self.scene.lock();
        for action in actions {
            if scene.apply(action) == Flow::Exit {
                log::info!("exit requested");
                ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            }
        }
    }

    fn status_ui(&self, ui: &mut egui::Ui) {
        {
            let scene = self.scene.lock();
            let state = &scene.state;

            ui.heading("View");
            egui::Grid::new("state").num_columns(4).show(ui, |ui| {
                ui.label("");
                ui.label("pitch");
                ui.label("yaw");
                ui.label("roll");
                ui.end_row();

                ui.label("model");
                ui.monospace(format!("{:+.2}", state.model.pitch));
                ui.monospace(format!("{:+.2}", state.model.yaw));
                ui.monospace(format!("{:+.2}", state.model.roll));
                ui.end_row();

                ui.label("orbit center");
                ui.monospace(format!("{:+.2}", state.orbit_center.pitch));
                ui.monospace(format!("{:+.2}", state.orbit_center.yaw));
                ui.monospace(format!("{:+.2}", state.orbit_center.roll));
                ui.end_row();
            });
            ui.monospace(format!("camera yaw {:+.2}", state.camera.yaw));
            ui.monospace(format!("zoom       {:+.2}", state.camera.zoom));
            ui.monospace(format!("program    {:?}", state.active_program()));
            ui.monospace(format!("vertices   {}", scene.vertex_count()));
            ui.monospace(format!("projection {:?}", scene.composer().projection));
            ui.monospace(format!("model      {:?}", scene.composer().model_binding));
        }

        ui.add(egui::Separator::default());

        ui.heading("Keys");
        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                egui::Grid::new("bindings").num_columns(2).show(ui, |ui| {
                    for binding in self.bindings.iter() {
                        ui.monospace(binding.key.name());
                        ui.label(format!("{:?}", binding.action));
                        ui.end_row();
                    }
                });
            });
    }

    fn custom_painting(&mut self, ui: &mut egui::Ui) {
        let size = ui.available_size();
        let (rect, _response) = ui.allocate_at_least(size, egui::Sense::hover());
        let ratio = aspect_ratio(rect.width(), rect.height());

        // Clone to Give to callback
        let scene = self.scene.clone();
        let shader = self.shader.clone();

        let callback = egui::PaintCallback {
            rect,
            callback: Arc::new(egui_glow::CallbackFn::new(move |_info, painter| {
                let gl = painter.gl();
                unsafe {
                    use glow::HasContext as _;
                    gl.enable(glow::DEPTH_TEST);
                    gl.clear(glow::DEPTH_BUFFER_BIT);
                }

                scene.lock().paint(gl, &shader, ratio);

                unsafe {
                    use glow::HasContext as _;
                    gl.disable(glow::DEPTH_TEST);
                }
            })),
        };
        ui.painter().add(callback);
    }
}
