use eframe::egui::{Context, Id, Modal, Response, RichText, Sides, Ui};

use crate::{
    action::{Action, ActionRequestQueue},
    state::ModalKind,
};

struct DialogResult {
    should_close: bool,
}

fn show_dialog<Heading, Body, Buttons>(
    ctx: &Context,
    id: Id,
    heading: Heading,
    body: Body,
    buttons: Buttons,
) -> DialogResult
where
    Heading: Into<RichText>,
    Body: FnOnce(&mut Ui),
    Buttons: FnOnce(&mut Ui),
{
    let modal = Modal::new(id).show(ctx, |ui| {
        ui.heading(heading);
        ui.add_space(4.0);

        body(ui);
        ui.add_space(8.0);

        Sides::new().show(ui, |_ui| {}, buttons);
    });

    DialogResult {
        should_close: modal.should_close(),
    }
}

fn primary_button(ui: &mut Ui, label: &str) -> Response {
    let response = ui.button(label);
    if ui.memory(|memory| memory.focused().is_none()) {
        response.request_focus();
    }
    response
}

pub(crate) fn show(ctx: &Context, kind: ModalKind, action_queue: &mut ActionRequestQueue) {
    let DialogResult { should_close } = match kind {
        ModalKind::ResetConfirm => show_dialog(
            ctx,
            Id::new("reset_confirm"),
            "Start Over?",
            |ui: &mut Ui| {
                ui.label("Shuffle the tiles into a new layout? Current progress will be lost.");
            },
            |ui: &mut Ui| {
                if primary_button(ui, "Start Over").clicked() {
                    action_queue.request(Action::Reset);
                    ui.close();
                }
                if ui.button("Cancel").clicked() {
                    ui.close();
                }
            },
        ),
        ModalKind::Completion(completion) => show_dialog(
            ctx,
            Id::new("completion").with(completion.generation),
            "Picture Complete!",
            |ui: &mut Ui| {
                ui.label(format!(
                    "Every tile is in place. You finished in {} moves.",
                    completion.moves
                ));
            },
            |ui: &mut Ui| {
                if primary_button(ui, "OK").clicked() {
                    ui.close();
                }
                if ui.button("New Layout").clicked() {
                    action_queue.request(Action::Reset);
                    ui.close();
                }
            },
        ),
    };

    if should_close {
        action_queue.request(Action::CloseModal);
    }
}
