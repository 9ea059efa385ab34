use crate::utils::*;
use tictactoe_core::*;
use yew::prelude::*;

#[derive(Copy, Clone, Debug, PartialEq)]
pub(crate) enum Msg {
    Play(CellIndex),
    JumpTo(usize),
    ToggleOrder,
    NewGame,
}

#[derive(Properties, Clone, PartialEq)]
struct SquareProps {
    index: CellIndex,
    cell: Cell,
    #[prop_or_default]
    highlighted: bool,
    callback: Callback<CellIndex>,
}

#[function_component(Square)]
fn square_component(props: &SquareProps) -> Html {
    let SquareProps {
        index,
        cell,
        highlighted,
        callback,
    } = props.clone();
    let mut class = classes!(
        "square",
        match cell {
            Cell::Empty => classes!(),
            Cell::Marked(Player::X) => classes!("x"),
            Cell::Marked(Player::O) => classes!("o"),
        }
    );
    if highlighted {
        class.push("emphasis");
    }

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("square {} clicked", index);
        callback.emit(index);
    });

    html! {
        <button {class} {onclick}>{cell.player().map_or("", Player::symbol)}</button>
    }
}

pub(crate) struct GameView {
    session: GameSession,
}

impl GameView {
    fn play(&mut self, index: CellIndex) -> bool {
        match self.session.apply_move(index) {
            Ok(outcome) => {
                log::debug!("play at {}: {:?}", index, outcome);
                outcome.has_update()
            }
            Err(err) => {
                log::error!("could not play at {}: {}", index, err);
                false
            }
        }
    }

    fn jump_to(&mut self, step: usize) -> bool {
        let prev_step = self.session.step();
        match self.session.jump_to(step) {
            Ok(()) => prev_step != step,
            Err(err) => {
                log::error!("could not jump: {}", err);
                false
            }
        }
    }

    fn view_board(&self, ctx: &Context<Self>) -> Html {
        let board = self.session.current_board();
        let winning_line = self.session.current_status().winning_line();
        let callback = ctx.link().callback(Msg::Play);

        html! {
            <div class="game-board">
                {
                    for (0..BOARD_SIDE).map(|row| html! {
                        <div class="board-row">
                            {
                                for (0..BOARD_SIDE).map(|col| {
                                    let index = row * BOARD_SIDE + col;
                                    let cell = board[index];
                                    let highlighted = winning_line.is_some_and(|line| line.contains(&index));
                                    let callback = callback.clone();
                                    html! {
                                        <Square {index} {cell} {highlighted} {callback}/>
                                    }
                                })
                            }
                        </div>
                    })
                }
            </div>
        }
    }

    fn view_history(&self, ctx: &Context<Self>) -> Html {
        html! {
            <ol>
                {
                    for self.session.history_list_in_display_order().into_iter().map(|entry| {
                        let step = entry.step;
                        let onclick = ctx.link().callback(move |e: MouseEvent| {
                            e.prevent_default();
                            Msg::JumpTo(step)
                        });
                        let class = entry.is_current.then_some("emphasis");
                        html! {
                            <li key={step.to_string()} class={classes!(class)}>
                                <a href="#" {onclick}>{describe_move(&entry)}</a>
                            </li>
                        }
                    })
                }
            </ol>
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            session: GameSession::new(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Play(index) => self.play(index),
            JumpTo(step) => self.jump_to(step),
            ToggleOrder => {
                self.session.toggle_display_order();
                true
            }
            NewGame => {
                log::debug!("new game");
                self.session.reset();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        use Msg::*;

        let status = status_text(self.session.current_status());
        let order = order_label(self.session.display_order());
        let cb_toggle_order = ctx.link().callback(|_| ToggleOrder);
        let cb_new_game = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            NewGame
        });

        html! {
            <div class="game">
                { self.view_board(ctx) }
                <div class="game-info">
                    <div class="status">{status}</div>
                    <nav>
                        <button onclick={cb_toggle_order}>{order}</button>
                        <button onclick={cb_new_game}>{"New game"}</button>
                    </nav>
                    { self.view_history(ctx) }
                </div>
            </div>
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn view_after(moves: &[CellIndex]) -> GameView {
        let mut view = GameView {
            session: GameSession::new(),
        };
        for &index in moves {
            assert!(view.play(index));
        }
        view
    }

    #[test]
    fn placed_move_redraws() {
        let mut view = view_after(&[]);

        assert!(view.play(4));
        assert_eq!(view.session.step(), 1);
    }

    #[test]
    fn rejected_move_skips_redraw() {
        let mut view = view_after(&[4]);

        assert!(!view.play(4));
        assert!(!view.play(9));
        assert_eq!(view.session.step(), 1);
    }

    #[test]
    fn move_after_win_skips_redraw() {
        let mut view = view_after(&[0, 4, 1, 3, 2]);

        assert!(!view.play(8));
    }

    #[test]
    fn jump_to_current_step_skips_redraw() {
        let mut view = view_after(&[0, 4]);

        assert!(!view.jump_to(2));
        assert!(view.jump_to(0));
        assert!(!view.jump_to(0));
        assert_eq!(view.session.step(), 0);
    }

    #[test]
    fn jump_past_history_skips_redraw() {
        let mut view = view_after(&[0]);

        assert!(!view.jump_to(5));
        assert_eq!(view.session.step(), 1);
    }
}
