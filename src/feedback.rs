//! Sound cues played in response to game events
use crate::config::FeedbackConfig;
use crate::consts;
use crate::game::GameEvent;
use rodio::{source::Buffered, Decoder, OutputStream, OutputStreamHandle, Sink, Source};
use std::fmt;
use std::io::{self, Cursor, Write};
use std::path::PathBuf;
use std::sync::mpsc::{self, Receiver, TryRecvError};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Sound {
    Eat,
    Lose,
}

impl Sound {
    pub(crate) fn for_event(event: GameEvent) -> Option<Sound> {
        match event {
            GameEvent::Scored { .. } => Some(Sound::Eat),
            GameEvent::GameOver { .. } => Some(Sound::Lose),
            GameEvent::Reset => None,
        }
    }
}

/// A way of making noise
pub(crate) trait Cue: fmt::Debug {
    fn name(&self) -> &'static str;

    /// Return whether this provider is currently able to play `sound`
    fn is_ready(&mut self, sound: Sound) -> bool;

    fn play(&mut self, sound: Sound) -> io::Result<()>;
}

/// An ordered list of [`Cue`] providers.  Each sound is played by the first
/// provider that is ready for it.
#[derive(Debug)]
pub(crate) struct Feedback {
    cues: Vec<Box<dyn Cue>>,
}

impl Feedback {
    pub(crate) fn new(cues: Vec<Box<dyn Cue>>) -> Feedback {
        Feedback { cues }
    }

    /// Build the provider list described by the configuration.  [`Silent`]
    /// always comes last.
    pub(crate) fn select(cfg: &FeedbackConfig) -> Feedback {
        let mut cues: Vec<Box<dyn Cue>> = Vec::new();
        if cfg.eat_sound.is_some() || cfg.lose_sound.is_some() {
            cues.push(Box::new(Speaker::open(
                cfg.eat_sound.clone(),
                cfg.lose_sound.clone(),
            )));
        }
        if cfg.bell {
            cues.push(Box::new(Bell::new(io::stdout())));
        }
        cues.push(Box::new(Silent));
        let names = cues.iter().map(|c| c.name()).collect::<Vec<_>>();
        log::info!("Sound providers: {}", names.join(", "));
        Feedback::new(cues)
    }

    /// Play the sound for `event`, if any.  Failures are logged and
    /// otherwise ignored.
    pub(crate) fn react(&mut self, event: GameEvent) {
        let Some(sound) = Sound::for_event(event) else {
            return;
        };
        for cue in &mut self.cues {
            if cue.is_ready(sound) {
                if let Err(e) = cue.play(sound) {
                    log::debug!("Failed to play {sound:?} sound via {}: {e}", cue.name());
                }
                break;
            }
        }
    }
}

/// An open connection to the default audio output device
struct Output {
    _stream: OutputStream,
    handle: OutputStreamHandle,
}

impl Output {
    fn open() -> Result<Output, rodio::StreamError> {
        let (stream, handle) = OutputStream::try_default()?;
        Ok(Output {
            _stream: stream,
            handle,
        })
    }
}

type Clip = Buffered<Decoder<Cursor<Vec<u8>>>>;

/// Plays decoded sound files through the audio device
///
/// The files are read from disk on a helper thread; until they arrive (and
/// as long as there is no audio device), the speaker is not ready.
pub(crate) struct Speaker {
    output: Option<Output>,
    eat: Option<Clip>,
    lose: Option<Clip>,
    loading: Option<Receiver<SampleData>>,
}

impl Speaker {
    /// Open the default audio device and start loading the sound files
    pub(crate) fn open(eat: Option<PathBuf>, lose: Option<PathBuf>) -> Speaker {
        let output = match Output::open() {
            Ok(output) => Some(output),
            Err(e) => {
                log::warn!("No audio output available: {e}");
                None
            }
        };
        Speaker::new(output, eat, lose)
    }

    fn new(output: Option<Output>, eat: Option<PathBuf>, lose: Option<PathBuf>) -> Speaker {
        let (sender, receiver) = mpsc::channel();
        std::thread::spawn(move || {
            // The receiver is gone if the game has already exited.
            let _ = sender.send(SampleData::load(eat, lose));
        });
        Speaker {
            output,
            eat: None,
            lose: None,
            loading: Some(receiver),
        }
    }

    fn poll(&mut self) {
        if let Some(ref receiver) = self.loading {
            match receiver.try_recv() {
                Ok(data) => {
                    self.eat = data.eat.and_then(decode);
                    self.lose = data.lose.and_then(decode);
                    log::debug!(
                        "Sound files loaded (eat: {}, lose: {})",
                        self.eat.is_some(),
                        self.lose.is_some()
                    );
                    self.loading = None;
                }
                Err(TryRecvError::Empty) => (),
                Err(TryRecvError::Disconnected) => self.loading = None,
            }
        }
    }

    fn clip(&self, sound: Sound) -> Option<&Clip> {
        match sound {
            Sound::Eat => self.eat.as_ref(),
            Sound::Lose => self.lose.as_ref(),
        }
    }
}

impl fmt::Debug for Speaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Speaker")
            .field("output", &self.output.is_some())
            .field("eat", &self.eat.is_some())
            .field("lose", &self.lose.is_some())
            .field("loading", &self.loading.is_some())
            .finish()
    }
}

impl Cue for Speaker {
    fn name(&self) -> &'static str {
        "speaker"
    }

    fn is_ready(&mut self, sound: Sound) -> bool {
        self.poll();
        self.output.is_some() && self.clip(sound).is_some()
    }

    fn play(&mut self, sound: Sound) -> io::Result<()> {
        let (Some(output), Some(clip)) = (self.output.as_ref(), self.clip(sound)) else {
            return Ok(());
        };
        let sink = Sink::try_new(&output.handle).map_err(io::Error::other)?;
        sink.append(clip.clone());
        sink.detach();
        Ok(())
    }
}

/// Undecoded contents of the sound files
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct SampleData {
    eat: Option<Vec<u8>>,
    lose: Option<Vec<u8>>,
}

impl SampleData {
    fn load(eat: Option<PathBuf>, lose: Option<PathBuf>) -> SampleData {
        SampleData {
            eat: eat.and_then(read_sample),
            lose: lose.and_then(read_sample),
        }
    }
}

fn read_sample(path: PathBuf) -> Option<Vec<u8>> {
    match fs_err::read(path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("Could not load sound file: {e}");
            None
        }
    }
}

fn decode(data: Vec<u8>) -> Option<Clip> {
    match Decoder::new(Cursor::new(data)) {
        Ok(source) => Some(source.buffered()),
        Err(e) => {
            log::warn!("Could not decode sound file: {e}");
            None
        }
    }
}

/// Rings the terminal bell
#[derive(Debug)]
pub(crate) struct Bell<W> {
    out: W,
}

impl<W: Write> Bell<W> {
    pub(crate) fn new(out: W) -> Bell<W> {
        Bell { out }
    }
}

impl<W: Write + fmt::Debug> Cue for Bell<W> {
    fn name(&self) -> &'static str {
        "terminal bell"
    }

    fn is_ready(&mut self, _sound: Sound) -> bool {
        true
    }

    fn play(&mut self, sound: Sound) -> io::Result<()> {
        let rings = match sound {
            Sound::Eat => consts::EAT_BELLS,
            Sound::Lose => consts::LOSE_BELLS,
        };
        self.out.write_all("\x07".repeat(rings).as_bytes())?;
        self.out.flush()
    }
}

/// Makes no noise at all
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Silent;

impl Cue for Silent {
    fn name(&self) -> &'static str {
        "silent"
    }

    fn is_ready(&mut self, _sound: Sound) -> bool {
        true
    }

    fn play(&mut self, _sound: Sound) -> io::Result<()> {
        Ok(())
    }
}
