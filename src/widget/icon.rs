// SPDX-License-Identifier: MPL-2.0
//! Icon widget: an embedded SVG resource scaled to fit its canvas.
//!
//! The host module owning the resources is resolved once, when the icon is
//! created, and never changes afterwards. Each paint reopens the resource,
//! parses it and draws it; nothing is cached between paints.

use crate::error::{Error, Result};
use crate::module::{Module, ModuleRegistry};
use crate::render::{Canvas, FitTransform, Invalidate, Surface, SvgDocument};
use crate::resource;
use std::fmt;

/// Where the icon is within a paint pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PaintState {
    #[default]
    Idle,
    Loading,
    Rendered,
}

/// Result of a successful paint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PaintOutcome {
    /// No resource identifier is set; the canvas was only cleared.
    Cleared,
    /// The document has no drawable area at this canvas size.
    Skipped,
    /// The document was drawn with the given placement.
    Drawn(FitTransform),
}

/// An icon rendering one embedded SVG resource.
pub struct Icon<S = Canvas> {
    resource_id: Option<String>,
    host: Option<Module>,
    entry: Module,
    surface: S,
    state: PaintState,
    dirty: bool,
    observer: Option<Box<dyn Invalidate>>,
}

impl Icon<Canvas> {
    /// Creates an icon with an empty canvas, resolving the host module from
    /// `chain` (innermost declaration first).
    pub fn new(registry: &ModuleRegistry, chain: &[Module]) -> Self {
        Self::with_surface(registry, chain, Canvas::default())
    }

    /// Resizes the owned canvas, requesting a repaint when the size changed.
    pub fn resize(&mut self, width: u32, height: u32) {
        if self.surface.resize(width, height) {
            self.invalidate();
        }
    }
}

impl<S: Surface> Icon<S> {
    pub fn with_surface(registry: &ModuleRegistry, chain: &[Module], surface: S) -> Self {
        let host = registry.resolve_host(chain);
        Self::with_host(registry, host, surface)
    }

    /// Creates an icon whose host module is given explicitly.
    pub fn with_host(registry: &ModuleRegistry, host: Option<Module>, surface: S) -> Self {
        Self {
            resource_id: None,
            host,
            entry: registry.entry().clone(),
            surface,
            state: PaintState::Idle,
            dirty: true,
            observer: None,
        }
    }

    /// Registers the observer told about every repaint request.
    pub fn on_invalidate(&mut self, observer: impl Invalidate + 'static) {
        self.observer = Some(Box::new(observer));
    }

    pub fn resource_id(&self) -> Option<&str> {
        self.resource_id.as_deref()
    }

    /// Sets the resource path, e.g. `icons/star.svg`, and requests a repaint
    /// if it differs from the current one.
    pub fn set_resource_id(&mut self, resource_id: impl Into<String>) {
        self.replace_resource_id(Some(resource_id.into()));
    }

    pub fn clear_resource_id(&mut self) {
        self.replace_resource_id(None);
    }

    fn replace_resource_id(&mut self, resource_id: Option<String>) {
        if self.resource_id == resource_id {
            return;
        }
        self.resource_id = resource_id;
        self.invalidate();
    }

    /// Marks the icon as needing a repaint and notifies the observer.
    pub fn invalidate(&mut self) {
        self.dirty = true;
        if let Some(observer) = self.observer.as_mut() {
            observer.invalidate();
        }
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub fn state(&self) -> PaintState {
        self.state
    }

    /// Host module resolved at creation, if any.
    pub fn host_module(&self) -> Option<&Module> {
        self.host.as_ref()
    }

    /// Module resources are read from: the host, or the entry module.
    pub fn effective_module(&self) -> &Module {
        self.host.as_ref().unwrap_or(&self.entry)
    }

    /// Fully qualified name the current resource id resolves to.
    pub fn qualified_resource_name(&self) -> Option<String> {
        let path = self.resource_id.as_deref().filter(|id| !id.is_empty())?;
        Some(resource::qualified_name(
            self.effective_module().full_name(),
            path,
        ))
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    /// Repaints the surface.
    ///
    /// # Errors
    ///
    /// - [`Error::ResourceNotFound`] when the effective module has no
    ///   resource under the computed name
    /// - [`Error::Svg`] when the resource is not a valid SVG document
    pub fn paint(&mut self) -> Result<PaintOutcome> {
        self.dirty = false;
        self.surface.clear();

        let Some(name) = self.qualified_resource_name() else {
            return Ok(PaintOutcome::Cleared);
        };

        self.state = PaintState::Loading;
        let result = self.render(&name);
        self.state = PaintState::Idle;

        if let Err(err) = &result {
            log::warn!("Failed to paint icon: {}", err);
        }
        result
    }

    /// Paints only when a repaint was requested since the last paint.
    pub fn paint_if_dirty(&mut self) -> Result<Option<PaintOutcome>> {
        if !self.dirty {
            return Ok(None);
        }
        self.paint().map(Some)
    }

    fn render(&mut self, name: &str) -> Result<PaintOutcome> {
        let module = self.host.as_ref().unwrap_or(&self.entry);
        let document = {
            let stream = module.open(name).ok_or_else(|| {
                log::debug!(
                    "Resources of '{}': {:?}",
                    module.full_name(),
                    module.resources().names()
                );
                Error::ResourceNotFound {
                    name: name.to_string(),
                    module: module.full_name().to_string(),
                }
            })?;
            SvgDocument::from_reader(stream)?
        };

        let (width, height) = self.surface.size();
        let Some(fit) = FitTransform::compute(width, height, document.view_box()) else {
            log::debug!("Nothing to draw for '{}' at {}x{}", name, width, height);
            return Ok(PaintOutcome::Skipped);
        };

        self.surface.draw(&document, fit.to_transform());
        self.state = PaintState::Rendered;
        log::debug!(
            "Painted '{}' at {}x{} (scale {})",
            name,
            width,
            height,
            fit.scale
        );
        Ok(PaintOutcome::Drawn(fit))
    }
}

impl<S> fmt::Debug for Icon<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Icon")
            .field("resource_id", &self.resource_id)
            .field("host", &self.host)
            .field("entry", &self.entry)
            .field("state", &self.state)
            .field("dirty", &self.dirty)
            .finish_non_exhaustive()
    }
}
