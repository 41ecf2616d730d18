// SPDX-License-Identifier: MIT

use crate::config::Config;
use crate::controller::Controller;
use crate::display::Renderer;
use crate::error::Result;
use crate::form::EditorForm;
use crate::notify::NoticeSink;
use crate::prompt;
use crate::remote::Api;

use super::{build_controller, reported};

pub async fn run(config: &Config, headline: Option<String>, body: Option<String>) -> Result<()> {
    let ctrl = build_controller(config)?;
    // Populate the cache first so the post-save render shows the new
    // record in context.
    reported(ctrl.load().await)?;

    let mut form = ctrl.prepare_create();
    form.headline = match headline {
        Some(h) => h,
        None => prompt::line("headline", None)?,
    };
    form.body = match body {
        Some(b) => b,
        None => prompt::body(None)?,
    };

    run_impl(&ctrl, &form).await
}

pub(crate) async fn run_impl<A: Api, N: NoticeSink, R: Renderer>(
    ctrl: &Controller<A, N, R>,
    form: &EditorForm,
) -> Result<()> {
    let saved = reported(ctrl.save(form).await)?;
    eprintln!("created summary #{}", saved.id);
    Ok(())
}

#[cfg(test)]
#[path = "new_tests.rs"]
mod tests;
