use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::HtmlAudioElement;
use yew::prelude::*;

pub const DEFAULT_VOLUME_PERCENT: u8 = 15;
pub const MAX_VOLUME_PERCENT: u8 = 100;
/// Delay between mount and the single autoplay attempt.
pub const AUTOPLAY_DELAY_MS: u32 = 500;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MediaError {
    #[error("playback blocked by the autoplay policy")]
    NotAllowed,
    #[error("playback request rejected: {0}")]
    Rejected(String),
}

impl MediaError {
    fn from_js(value: JsValue) -> Self {
        match value.dyn_ref::<web_sys::DomException>() {
            Some(exception) if exception.name() == "NotAllowedError" => MediaError::NotAllowed,
            Some(exception) => MediaError::Rejected(exception.message()),
            None => MediaError::Rejected(format!("{:?}", value)),
        }
    }
}

/// The playback surface the session drives. Implemented over the page's
/// `<audio>` element in the browser and by recording fakes in tests.
pub trait MediaElement {
    type Playback: Future<Output = Result<(), MediaError>> + 'static;

    fn play(&self) -> Self::Playback;
    fn pause(&self);
    fn set_volume(&self, fraction: f64);
}

fn volume_fraction(percent: u8) -> f64 {
    f64::from(percent) / 100.0
}

/// Parses a slider value ("37", "37.4") into a whole percentage in 0..=100.
pub fn parse_volume(raw: &str) -> Option<u8> {
    let value: f64 = raw.trim().parse().ok()?;
    if !value.is_finite() {
        return None;
    }
    Some(value.round().clamp(0.0, f64::from(MAX_VOLUME_PERCENT)) as u8)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayOrigin {
    Autoplay,
    Listener,
}

/// Identifies one play request. Only the most recent request may change state
/// when it settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTicket {
    epoch: u64,
    origin: PlayOrigin,
}

pub struct PendingPlay<P> {
    pub ticket: PlayTicket,
    pub playback: P,
}

/// Owns the single background audio stream. Every operation is a no-op while
/// no element is attached.
pub struct AudioSession<E> {
    element: Option<E>,
    is_playing: bool,
    volume_percent: u8,
    play_epoch: u64,
    autoplay_attempted: bool,
    autoplay_block_reported: bool,
}

impl<E: MediaElement> Default for AudioSession<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: MediaElement> AudioSession<E> {
    pub fn new() -> Self {
        Self {
            element: None,
            is_playing: false,
            volume_percent: DEFAULT_VOLUME_PERCENT,
            play_epoch: 0,
            autoplay_attempted: false,
            autoplay_block_reported: false,
        }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn volume_percent(&self) -> u8 {
        self.volume_percent
    }

    #[cfg(test)]
    pub fn is_attached(&self) -> bool {
        self.element.is_some()
    }

    pub fn attach(&mut self, element: E) {
        element.set_volume(volume_fraction(self.volume_percent));
        self.element = Some(element);
    }

    /// Releases the element, pausing it first so a detached node stops sounding.
    /// Requests still in flight are ignored once they settle.
    pub fn detach(&mut self) -> Option<E> {
        let element = self.element.take()?;
        element.pause();
        self.is_playing = false;
        self.play_epoch += 1;
        Some(element)
    }

    /// Sets the default volume and asks for playback. Runs at most once per session.
    pub fn attempt_autoplay(&mut self) -> Option<PendingPlay<E::Playback>> {
        if self.autoplay_attempted {
            return None;
        }
        let element = self.element.as_ref()?;
        self.autoplay_attempted = true;
        self.volume_percent = DEFAULT_VOLUME_PERCENT;
        element.set_volume(volume_fraction(DEFAULT_VOLUME_PERCENT));
        let playback = element.play();
        Some(PendingPlay {
            ticket: self.next_ticket(PlayOrigin::Autoplay),
            playback,
        })
    }

    /// Flips playback. Returns the pending request when this toggle started playback.
    pub fn toggle(&mut self) -> Option<PendingPlay<E::Playback>> {
        let element = self.element.as_ref()?;
        if self.is_playing {
            element.pause();
            self.is_playing = false;
            self.play_epoch += 1;
            debug!("Background audio paused");
            None
        } else {
            let playback = element.play();
            self.is_playing = true;
            debug!("Background audio resumed");
            Some(PendingPlay {
                ticket: self.next_ticket(PlayOrigin::Listener),
                playback,
            })
        }
    }

    /// Applies the outcome of a play request.
    pub fn settle(&mut self, ticket: PlayTicket, outcome: Result<(), MediaError>) {
        if self.element.is_none() || ticket.epoch != self.play_epoch {
            return;
        }
        match (outcome, ticket.origin) {
            (Ok(()), _) => self.is_playing = true,
            (Err(err), PlayOrigin::Autoplay) => {
                self.is_playing = false;
                if !self.autoplay_block_reported {
                    self.autoplay_block_reported = true;
                    info!("Autoplay not permitted ({}), waiting for the listener to start playback", err);
                }
            }
            (Err(err), PlayOrigin::Listener) => {
                self.is_playing = false;
                warn!("Background audio could not start: {}", err);
            }
        }
    }

    /// Last value wins; slider drags call this for every step.
    pub fn set_volume(&mut self, percent: u8) {
        let Some(element) = self.element.as_ref() else {
            return;
        };
        let percent = percent.min(MAX_VOLUME_PERCENT);
        self.volume_percent = percent;
        element.set_volume(volume_fraction(percent));
    }

    fn next_ticket(&mut self, origin: PlayOrigin) -> PlayTicket {
        self.play_epoch += 1;
        PlayTicket {
            epoch: self.play_epoch,
            origin,
        }
    }
}

/// The page's looping `<audio>` element.
#[derive(Clone)]
pub struct WebAudio {
    element: HtmlAudioElement,
}

impl WebAudio {
    pub fn new(element: HtmlAudioElement) -> Self {
        element.set_loop(true);
        Self { element }
    }
}

impl MediaElement for WebAudio {
    type Playback = Pin<Box<dyn Future<Output = Result<(), MediaError>>>>;

    fn play(&self) -> Self::Playback {
        let request = self.element.play();
        Box::pin(async move {
            let promise = request.map_err(MediaError::from_js)?;
            JsFuture::from(promise)
                .await
                .map(|_| ())
                .map_err(MediaError::from_js)
        })
    }

    fn pause(&self) {
        if let Err(err) = self.element.pause() {
            warn!("Pausing background audio failed: {:?}", err);
        }
    }

    fn set_volume(&self, fraction: f64) {
        self.element.set_volume(fraction);
    }
}

/// What the rendering layer sees of the audio session.
#[derive(Clone, PartialEq)]
pub struct AudioControls {
    pub is_playing: bool,
    pub volume_percent: u8,
    pub toggle: Callback<()>,
    pub set_volume: Callback<u8>,
}

type SharedSession = Rc<RefCell<AudioSession<WebAudio>>>;

fn settle_in_background(
    session: SharedSession,
    rerender: UseForceUpdateHandle,
    pending: PendingPlay<<WebAudio as MediaElement>::Playback>,
) {
    spawn_local(async move {
        let outcome = pending.playback.await;
        session.borrow_mut().settle(pending.ticket, outcome);
        rerender.force_update();
    });
}

/// Binds an [`AudioSession`] to the `<audio>` element behind `node` and schedules
/// the deferred autoplay attempt. Unmounting cancels a pending attempt and
/// detaches the element.
#[hook]
pub fn use_audio_session(node: NodeRef) -> AudioControls {
    let session: SharedSession = use_mut_ref(AudioSession::new);
    let rerender = use_force_update();

    {
        let session = session.clone();
        let rerender = rerender.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                match node.cast::<HtmlAudioElement>() {
                    Some(element) => session.borrow_mut().attach(WebAudio::new(element)),
                    None => debug!("Audio element not mounted, playback controls stay inert"),
                }

                let autoplay = {
                    let session = session.clone();
                    Timeout::new(AUTOPLAY_DELAY_MS, move || {
                        let pending = session.borrow_mut().attempt_autoplay();
                        if let Some(pending) = pending {
                            settle_in_background(session, rerender.clone(), pending);
                        }
                        rerender.force_update();
                    })
                };

                move || {
                    drop(autoplay);
                    session.borrow_mut().detach();
                }
            },
            node,
        );
    }

    let toggle = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |_: ()| {
            let pending = session.borrow_mut().toggle();
            if let Some(pending) = pending {
                settle_in_background(session.clone(), rerender.clone(), pending);
            }
            rerender.force_update();
        })
    };

    let set_volume = {
        let session = session.clone();
        let rerender = rerender.clone();
        Callback::from(move |percent: u8| {
            session.borrow_mut().set_volume(percent);
            rerender.force_update();
        })
    };

    let current = session.borrow();
    AudioControls {
        is_playing: current.is_playing(),
        volume_percent: current.volume_percent(),
        toggle,
        set_volume,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{ready, Ready};

    #[derive(Default)]
    struct Recorder {
        volume: Option<f64>,
        plays: usize,
        pauses: usize,
    }

    #[derive(Clone, Default)]
    struct FakeElement {
        log: Rc<RefCell<Recorder>>,
    }

    impl MediaElement for FakeElement {
        type Playback = Ready<Result<(), MediaError>>;

        fn play(&self) -> Self::Playback {
            self.log.borrow_mut().plays += 1;
            ready(Ok(()))
        }

        fn pause(&self) {
            self.log.borrow_mut().pauses += 1;
        }

        fn set_volume(&self, fraction: f64) {
            self.log.borrow_mut().volume = Some(fraction);
        }
    }

    fn attached() -> (AudioSession<FakeElement>, Rc<RefCell<Recorder>>) {
        let element = FakeElement::default();
        let log = element.log.clone();
        let mut session = AudioSession::new();
        session.attach(element);
        (session, log)
    }

    #[test]
    fn operations_without_element_are_no_ops() {
        let mut session: AudioSession<FakeElement> = AudioSession::new();
        assert!(session.attempt_autoplay().is_none());
        assert!(session.toggle().is_none());
        session.set_volume(80);
        assert!(!session.is_playing());
        assert_eq!(session.volume_percent(), DEFAULT_VOLUME_PERCENT);
        assert!(session.detach().is_none());
    }

    #[test]
    fn autoplay_sets_default_volume_and_plays_on_success() {
        let (mut session, log) = attached();
        session.set_volume(70);
        let pending = session.attempt_autoplay().expect("element attached");
        assert_eq!(log.borrow().volume, Some(0.15));
        assert_eq!(session.volume_percent(), 15);
        assert!(!session.is_playing(), "playing only once the request resolves");
        session.settle(pending.ticket, Ok(()));
        assert!(session.is_playing());
    }

    #[test]
    fn blocked_autoplay_stays_paused() {
        let (mut session, _log) = attached();
        let pending = session.attempt_autoplay().expect("element attached");
        session.settle(pending.ticket, Err(MediaError::NotAllowed));
        assert!(!session.is_playing());
        assert!(session.autoplay_block_reported);
    }

    #[test]
    fn autoplay_is_attempted_once() {
        let (mut session, log) = attached();
        assert!(session.attempt_autoplay().is_some());
        assert!(session.attempt_autoplay().is_none());
        assert_eq!(log.borrow().plays, 1);
    }

    #[test]
    fn double_toggle_restores_play_state() {
        let (mut session, log) = attached();
        let before = session.is_playing();
        let pending = session.toggle();
        assert!(pending.is_some());
        assert!(session.is_playing());
        assert!(session.toggle().is_none());
        assert_eq!(session.is_playing(), before);
        assert_eq!(log.borrow().plays, 1);
        assert_eq!(log.borrow().pauses, 1);
    }

    #[test]
    fn rejected_listener_play_rolls_back() {
        let (mut session, _log) = attached();
        let pending = session.toggle().expect("play requested");
        session.settle(pending.ticket, Err(MediaError::Rejected("aborted".into())));
        assert!(!session.is_playing());
    }

    #[test]
    fn stale_settlement_is_ignored() {
        let (mut session, _log) = attached();
        let first = session.toggle().expect("play requested");
        session.toggle();
        let second = session.toggle().expect("play requested again");
        session.settle(first.ticket, Err(MediaError::Rejected("aborted".into())));
        assert!(session.is_playing());
        session.settle(second.ticket, Ok(()));
        assert!(session.is_playing());
    }

    #[test]
    fn late_autoplay_after_pause_does_not_resume() {
        let (mut session, _log) = attached();
        let autoplay = session.attempt_autoplay().expect("element attached");
        session.toggle();
        session.toggle();
        assert!(!session.is_playing());
        session.settle(autoplay.ticket, Ok(()));
        assert!(!session.is_playing());
    }

    #[test]
    fn volume_is_mirrored_exactly() {
        let (mut session, log) = attached();
        for percent in 0..=100u8 {
            session.set_volume(percent);
            assert_eq!(session.volume_percent(), percent);
            assert_eq!(log.borrow().volume, Some(f64::from(percent) / 100.0));
        }
    }

    #[test]
    fn slider_sequence_last_value_wins() {
        let (mut session, log) = attached();
        for percent in [20, 35, 52, 41] {
            session.set_volume(percent);
        }
        assert_eq!(session.volume_percent(), 41);
        assert_eq!(log.borrow().volume, Some(0.41));
    }

    #[test]
    fn volume_above_range_is_clamped() {
        let (mut session, log) = attached();
        session.set_volume(180);
        assert_eq!(session.volume_percent(), 100);
        assert_eq!(log.borrow().volume, Some(1.0));
    }

    #[test]
    fn detach_pauses_and_silences_pending_requests() {
        let (mut session, log) = attached();
        let pending = session.attempt_autoplay().expect("element attached");
        session.detach();
        assert!(!session.is_attached());
        assert_eq!(log.borrow().pauses, 1);
        session.settle(pending.ticket, Ok(()));
        assert!(!session.is_playing());
    }

    #[test]
    fn attach_applies_current_volume() {
        let element = FakeElement::default();
        let log = element.log.clone();
        let mut session = AudioSession::new();
        session.attach(element);
        assert_eq!(log.borrow().volume, Some(0.15));
    }

    #[test]
    fn slider_values_are_parsed_and_clamped() {
        assert_eq!(parse_volume("37"), Some(37));
        assert_eq!(parse_volume(" 37.6 "), Some(38));
        assert_eq!(parse_volume("140"), Some(100));
        assert_eq!(parse_volume("-3"), Some(0));
        assert_eq!(parse_volume("loud"), None);
        assert_eq!(parse_volume("NaN"), None);
    }
}
