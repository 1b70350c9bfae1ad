use anyhow::Result;
use log::error;

use crate::config::RenderConfig;
use crate::core::RenderContext;
use crate::traits::Presenter;

/// Display combines the render context with a presenter and drives the
/// per-frame draw → present handoff
pub struct Display<P: Presenter> {
    context: RenderContext,
    presenter: P,
    frame_number: u64,
}

impl<P: Presenter> Display<P> {
    /// Allocate the default buffer at the presenter's display size
    pub fn new(config: &RenderConfig, presenter: P) -> Result<Self> {
        let (width, height) = presenter.display_size();
        let context = RenderContext::with_display_size(config, width, height)?;

        Ok(Self {
            context,
            presenter,
            frame_number: 0,
        })
    }

    /// Full frame cycle: draw into the active buffer, then present it
    pub fn frame<F>(&mut self, draw: F) -> Result<()>
    where
        F: FnOnce(&mut RenderContext),
    {
        draw(&mut self.context);
        self.blit()
    }

    /// Hand the active buffer to the presenter
    pub fn blit(&mut self) -> Result<()> {
        let frame = self.context.request_present()?;
        if let Err(e) = self.presenter.present(frame) {
            error!("Present failed on frame {}: {:#}", self.frame_number, e);
            return Err(e);
        }

        self.frame_number += 1;
        Ok(())
    }

    /// Frames presented so far
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn context(&self) -> &RenderContext {
        &self.context
    }

    pub fn context_mut(&mut self) -> &mut RenderContext {
        &mut self.context
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }
}
