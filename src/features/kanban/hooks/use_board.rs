use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::core::services::{use_board_socket, ConnectionState};
use crate::features::kanban::board::{BoardState, DragSlot};
use crate::models::{Task, TaskStatus};

pub struct BoardHook {
    pub board: ReadSignal<BoardState>,
    pub connection: Signal<ConnectionState>,
    /// Card showing the `dragging` class; trails the drag slot by one tick.
    pub dragging: ReadSignal<Option<String>>,
    pub start_drag: Callback<String>,
    pub end_drag: Callback<()>,
    pub drop_on: Callback<TaskStatus>,
    pub move_to: Callback<(String, TaskStatus)>,
}

pub fn use_board(project_id: Option<String>, tasks: Vec<Task>) -> BoardHook {
    let board = RwSignal::new(BoardState::new(project_id, tasks));
    let (dragging, set_dragging) = signal::<Option<String>>(None);
    let drag = StoredValue::new(DragSlot::default());

    let socket = use_board_socket(move |message| {
        web_sys::console::log_1(&format!("Socket message: {:?}", message).into());
        board.update(|b| {
            if !b.apply(message) {
                web_sys::console::log_1(&"Socket message did not match any card".into());
            }
        });
    });
    let send = socket.send;

    let start_drag = Callback::new(move |task_id: String| {
        drag.update_value(|d| d.begin(task_id.clone()));
        // Applied on the next tick so the drag image is taken without the class.
        Timeout::new(0, move || {
            if drag.with_value(|d| d.current() == Some(task_id.as_str())) {
                set_dragging.set(Some(task_id));
            }
        })
        .forget();
    });

    let end_drag = Callback::new(move |_: ()| {
        drag.update_value(|d| d.end());
        set_dragging.set(None);
    });

    // The drop re-renders the columns, so the source card may never see its
    // dragend. The drop itself ends the gesture.
    let drop_on = Callback::new(move |status: TaskStatus| {
        let sent = board
            .try_update(|b| drag.try_update_value(|d| b.drop_on(d, status)))
            .flatten()
            .flatten();
        set_dragging.set(None);
        if let Some(message) = sent {
            web_sys::console::log_1(&format!("Moving task: {:?}", message).into());
            send.run(message);
        }
    });

    let move_to = Callback::new(move |(task_id, status): (String, TaskStatus)| {
        let mut slot = DragSlot::default();
        slot.begin(task_id);
        let sent = board.try_update(|b| b.drop_on(&mut slot, status)).flatten();
        if let Some(message) = sent {
            send.run(message);
        }
    });

    BoardHook {
        board: board.read_only(),
        connection: socket.connection,
        dragging,
        start_drag,
        end_drag,
        drop_on,
        move_to,
    }
}
