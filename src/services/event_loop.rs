// ============================================================================
// EVENT LOOP - Timers y tareas async detrás de un trait
// ============================================================================
// En el navegador: spawn_local + gloo_timers. Los tests usan un loop manual
// para disparar ticks y timeouts de forma determinista.
// ============================================================================

use futures::future::{FutureExt, LocalBoxFuture};
use gloo_timers::callback::Interval;
use gloo_timers::future::TimeoutFuture;

pub trait EventLoop: Clone + 'static {
    /// Handle del timer periódico; al soltarlo el timer queda cancelado
    type Interval: 'static;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>);

    fn interval(&self, period_ms: u32, callback: Box<dyn FnMut()>) -> Self::Interval;

    fn sleep(&self, duration_ms: u32) -> LocalBoxFuture<'static, ()>;
}

/// Event loop del navegador (hilo de UI)
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserEventLoop;

impl EventLoop for BrowserEventLoop {
    type Interval = Interval;

    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }

    fn interval(&self, period_ms: u32, mut callback: Box<dyn FnMut()>) -> Interval {
        // gloo Interval hace clearInterval en Drop
        Interval::new(period_ms, move || callback())
    }

    fn sleep(&self, duration_ms: u32) -> LocalBoxFuture<'static, ()> {
        TimeoutFuture::new(duration_ms).boxed_local()
    }
}
