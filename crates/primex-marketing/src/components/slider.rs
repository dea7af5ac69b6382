//! Auto-advancing portfolio slider

use leptos::leptos_dom::helpers::TimeoutHandle;
use leptos::*;
use primex_core::SlideRotator;
use std::time::Duration;

/// Exit animation length; the incoming slide mounts after it.
const EXIT_DURATION: Duration = Duration::from_millis(500);

trait Cancel {
    fn cancel(self);
}

impl Cancel for TimeoutHandle {
    fn cancel(self) {
        self.clear();
    }
}

/// The one exit animation in flight. Starting another clears the old
/// timer so it cannot end the new exit early.
struct ExitTimer<H> {
    pending: Option<H>,
}

impl<H: Cancel> ExitTimer<H> {
    fn new() -> Self {
        Self { pending: None }
    }

    fn start(&mut self, handle: H) {
        if let Some(old) = self.pending.replace(handle) {
            old.cancel();
        }
    }

    /// The timer fired on its own.
    fn finish(&mut self) {
        self.pending = None;
    }

    fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.cancel();
        }
    }
}

#[component]
pub fn PortfolioSlider(rotator: SlideRotator) -> impl IntoView {
    let slides = rotator.slides().to_vec();
    let count = slides.len();
    let interval = rotator.interval();

    let current = create_rw_signal(rotator.current());
    let rotator = store_value(rotator);
    rotator.update_value(|r| {
        r.subscribe(move |index| current.set(*index));
    });

    // The slide on screen lags `current` by one exit animation.
    let shown = create_rw_signal(current.get_untracked());
    let leaving = create_rw_signal(false);
    let exit = store_value(ExitTimer::<TimeoutHandle>::new());
    create_effect(move |prev: Option<usize>| {
        let next = current.get();
        if prev.is_some_and(|prev| prev != next) {
            leaving.set(true);
            let timer = set_timeout_with_handle(
                move || {
                    exit.try_update_value(ExitTimer::finish);
                    shown.try_set(current.get_untracked());
                    leaving.try_set(false);
                },
                EXIT_DURATION,
            );
            match timer {
                Ok(handle) => exit.update_value(|t| t.start(handle)),
                Err(err) => {
                    tracing::warn!(?err, "slide exit timer unavailable");
                    shown.set(next);
                    leaving.set(false);
                }
            }
        }
        next
    });
    on_cleanup(move || {
        exit.try_update_value(ExitTimer::cancel);
    });

    create_effect(move |_| {
        let timer = set_interval_with_handle(
            move || {
                rotator.try_update_value(|r| r.advance());
            },
            interval,
        );
        match timer {
            Ok(handle) => on_cleanup(move || handle.clear()),
            Err(err) => tracing::warn!(?err, "slider timer unavailable"),
        }
    });

    let slide = move || slides[shown.get()].clone();

    view! {
        <div class="relative w-full h-full rounded-2xl shadow-2xl backdrop-blur-md overflow-hidden bg-[#041022] border border-white/5">
            <h4 class="text-lg font-semibold text-white p-6 pb-2 md:pb-0">"Trusted Partners & Portfolio Highlights"</h4>
            <div class="h-full w-full relative">
                <div
                    class=move || if leaving.get() {
                        "relative md:absolute inset-x-0 top-6 bottom-0 flex flex-col items-center justify-center p-6 text-center animate-slide-out"
                    } else {
                        "relative md:absolute inset-x-0 top-6 bottom-0 flex flex-col items-center justify-center p-6 text-center animate-slide-in"
                    }
                >
                    {move || {
                        let slide = slide();
                        view! {
                            <img
                                src=slide.image.clone()
                                alt=slide.title.clone()
                                class="w-3/4 h-40 object-cover rounded-lg shadow-xl mb-4 border border-white/10"
                            />
                            <div class="mb-4">
                                <h5 class="text-2xl font-bold text-white mb-2">{slide.title}</h5>
                                <p class="text-gray-400 max-w-xs">{slide.description}</p>
                            </div>
                        }
                    }}
                    <div class="flex space-x-2 z-10">
                        {(0..count).map(|index| view! {
                            <button
                                class=move || if current.get() == index {
                                    "h-2.5 rounded-full cursor-pointer transition-all duration-300 bg-cyan-400 w-6"
                                } else {
                                    "w-2.5 h-2.5 rounded-full cursor-pointer transition-all duration-300 bg-gray-600 hover:bg-white"
                                }
                                aria-label=format!("Go to slide {}", index + 1)
                                on:click=move |_| {
                                    rotator.update_value(|r| {
                                        if let Err(err) = r.select(index) {
                                            tracing::warn!(%err, "slide selection ignored");
                                        }
                                    });
                                }
                            ></button>
                        }).collect_view()}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct FakeTimer {
        id: u32,
        cancelled: Rc<RefCell<Vec<u32>>>,
    }

    impl Cancel for FakeTimer {
        fn cancel(self) {
            self.cancelled.borrow_mut().push(self.id);
        }
    }

    fn timers() -> (Rc<RefCell<Vec<u32>>>, impl Fn(u32) -> FakeTimer) {
        let cancelled = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&cancelled);
        (cancelled, move |id| FakeTimer {
            id,
            cancelled: Rc::clone(&log),
        })
    }

    #[test]
    fn test_new_exit_clears_pending_timer() {
        let (cancelled, timer) = timers();
        let mut exit = ExitTimer::new();
        exit.start(timer(1));
        exit.start(timer(2));
        assert_eq!(*cancelled.borrow(), vec![1]);

        exit.start(timer(3));
        assert_eq!(*cancelled.borrow(), vec![1, 2]);
    }

    #[test]
    fn test_finished_timer_is_not_cleared() {
        let (cancelled, timer) = timers();
        let mut exit = ExitTimer::new();
        exit.start(timer(1));
        exit.finish();
        exit.start(timer(2));
        exit.cancel();
        assert_eq!(*cancelled.borrow(), vec![2]);

        exit.cancel();
        assert_eq!(*cancelled.borrow(), vec![2]);
    }
}
