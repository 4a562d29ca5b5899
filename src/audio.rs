//! Audio system using Web Audio API
//!
//! Procedurally generated sound effects and background drone - no external files needed!

use web_sys::{AudioContext, GainNode, OscillatorNode, OscillatorType};

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Mouse hops
    Jump,
    /// Mouse caught by a trap
    GameOver,
    /// Mouse reached the exit
    Win,
}

/// Running background music voices
struct Music {
    voices: Vec<OscillatorNode>,
    gain: GainNode,
}

/// Audio manager for the game
pub struct AudioManager {
    ctx: Option<AudioContext>,
    sfx_volume: f32,
    music_volume: f32,
    music: Option<Music>,
}

impl AudioManager {
    pub fn new(settings: &Settings) -> Self {
        // Try to create audio context (may fail if not in secure context)
        let ctx = AudioContext::new().ok();
        if ctx.is_none() {
            log::warn!("Failed to create AudioContext - audio disabled");
        }
        Self {
            ctx,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            music: None,
        }
    }

    /// Route an audio-related game event; other events are ignored
    pub fn handle(&mut self, event: &GameEvent) {
        match event {
            GameEvent::MusicStart => self.start_music(),
            GameEvent::MusicStop => self.stop_music(),
            GameEvent::Jump => self.play(SoundEffect::Jump),
            GameEvent::GameOver => self.play(SoundEffect::GameOver),
            GameEvent::Win => self.play(SoundEffect::Win),
            GameEvent::Notice(_) => {}
        }
    }

    /// Resume context if suspended (browsers require user gesture)
    fn wake(&self) -> Option<&AudioContext> {
        let ctx = self.ctx.as_ref()?;
        if ctx.state() == web_sys::AudioContextState::Suspended {
            let _ = ctx.resume();
        }
        Some(ctx)
    }

    /// Play a sound effect
    pub fn play(&self, effect: SoundEffect) {
        let vol = self.sfx_volume;
        if vol <= 0.0 {
            return;
        }
        let Some(ctx) = self.wake() else { return };

        match effect {
            SoundEffect::Jump => self.play_jump(ctx, vol),
            SoundEffect::GameOver => self.play_game_over(ctx, vol),
            SoundEffect::Win => self.play_win(ctx, vol),
        }
    }

    /// Start the background drone (restarts if already playing)
    pub fn start_music(&mut self) {
        self.stop_music();
        if self.music_volume <= 0.0 {
            return;
        }
        let Some(ctx) = self.wake() else { return };
        let Ok(gain) = ctx.create_gain() else { return };
        if gain.connect_with_audio_node(&ctx.destination()).is_err() {
            return;
        }
        let t = ctx.current_time();
        gain.gain().set_value_at_time(0.0001, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(self.music_volume * 0.15, t + 1.5)
            .ok();

        let mut voices = Vec::new();
        for (freq, kind) in [
            (110.0, OscillatorType::Sine),
            (164.8, OscillatorType::Triangle),
            (220.5, OscillatorType::Sine),
        ] {
            let Ok(osc) = ctx.create_oscillator() else { continue };
            osc.set_type(kind);
            osc.frequency().set_value(freq);
            if osc.connect_with_audio_node(&gain).is_ok() {
                osc.start().ok();
                voices.push(osc);
            }
        }
        log::debug!("Background music started ({} voices)", voices.len());
        self.music = Some(Music { voices, gain });
    }

    /// Fade out and stop the background drone
    pub fn stop_music(&mut self) {
        let Some(music) = self.music.take() else { return };
        let Some(ctx) = &self.ctx else { return };
        let t = ctx.current_time();
        music.gain.gain().set_value_at_time(music.gain.gain().value(), t).ok();
        music.gain.gain().exponential_ramp_to_value_at_time(0.0001, t + 0.3).ok();
        for osc in &music.voices {
            osc.stop_with_when(t + 0.35).ok();
        }
        log::debug!("Background music stopped");
    }

    // === Sound generators ===

    /// Create an oscillator with gain envelope
    fn create_osc(
        &self,
        ctx: &AudioContext,
        freq: f32,
        osc_type: OscillatorType,
    ) -> Option<(OscillatorNode, GainNode)> {
        let osc = ctx.create_oscillator().ok()?;
        let gain = ctx.create_gain().ok()?;

        osc.set_type(osc_type);
        osc.frequency().set_value(freq);
        osc.connect_with_audio_node(&gain).ok()?;
        gain.connect_with_audio_node(&ctx.destination()).ok()?;

        Some((osc, gain))
    }

    /// Jump - quick upward boing
    fn play_jump(&self, ctx: &AudioContext, vol: f32) {
        let Some((osc, gain)) = self.create_osc(ctx, 300.0, OscillatorType::Square) else {
            return;
        };
        let t = ctx.current_time();

        gain.gain().set_value_at_time(vol * 0.15, t).ok();
        gain.gain()
            .exponential_ramp_to_value_at_time(0.01, t + 0.18)
            .ok();
        osc.frequency().set_value_at_time(300.0, t).ok();
        osc.frequency()
            .exponential_ramp_to_value_at_time(900.0, t + 0.12)
            .ok();

        osc.start().ok();
        osc.stop_with_when(t + 0.2).ok();
    }

    /// Game over - sad descending
    fn play_game_over(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [392.0, 349.0, 311.0, 196.0].iter().enumerate() {
            let delay = i as f64 * 0.22;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Sawtooth) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.2, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.35)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.4).ok();
            }
        }
    }

    /// Win - rising arpeggio
    fn play_win(&self, ctx: &AudioContext, vol: f32) {
        for (i, freq) in [523.0, 659.0, 784.0, 1047.0, 1319.0].iter().enumerate() {
            let delay = i as f64 * 0.09;
            if let Some((osc, gain)) = self.create_osc(ctx, *freq, OscillatorType::Triangle) {
                let t = ctx.current_time() + delay;
                gain.gain().set_value_at_time(vol * 0.28, t).ok();
                gain.gain()
                    .exponential_ramp_to_value_at_time(0.01, t + 0.3)
                    .ok();
                osc.start_with_when(t).ok();
                osc.stop_with_when(t + 0.35).ok();
            }
        }
    }
}
