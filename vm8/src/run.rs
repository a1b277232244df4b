use std::error::Error;
use std::time::{Duration, Instant};

use log::{error, info};
use sdl2::event::Event;
use sdl2::keyboard::Keycode;

use vm8_core::{Frame, Keypad, Line, Registers, Sink};
use vm8_display::Display;

use crate::cli::RunArgs;
use crate::keymap::keymap;

/// Receives the VM's output: frames go to the window, trace lines to stdout.
struct Host {
    display: Display,
    trace: bool,
    sounding: bool,
    tone_this_step: bool,
}

impl Sink for Host {
    fn frame(&mut self, frame: Frame<'_>) {
        if let Err(e) = self.display.render(frame) {
            error!("failed to render frame: {}", e);
        }
    }

    fn trace(&mut self, line: &Line) {
        if self.trace {
            println!("{}", line);
        }
    }

    fn tone(&mut self) {
        self.tone_this_step = true;
    }
}

impl Host {
    /// Logs when the tone starts and stops; there's no audio output.
    fn end_step(&mut self) {
        if self.tone_this_step != self.sounding {
            self.sounding = self.tone_this_step;
            info!("tone {}", if self.sounding { "on" } else { "off" });
        }
        self.tone_this_step = false;
    }
}

pub fn run(args: &RunArgs) -> Result<(), Box<dyn Error>> {
    let mut vm = args.build_vm();
    args.program.load_into(&mut vm)?;

    let sdl = sdl2::init()?;
    let mut host = Host {
        display: Display::new(&sdl, args.scale)?,
        trace: args.trace,
        sounding: false,
        tone_this_step: false,
    };
    host.frame(vm.frame());
    let mut events = sdl.event_pump()?;

    let cycle_time = Duration::from_secs(1) / args.clock_hz.max(1);
    let mut last_cycle = Instant::now();

    // Whether or not the clock speed should be respected
    let mut fast_forward = false;

    'event: loop {
        for event in events.poll_iter() {
            match event {
                Event::Quit { .. } => break 'event,
                Event::KeyDown {
                    keycode: Some(key),
                    repeat: false,
                    ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => vm.key_press(kc),
                    (Keycode::Escape, _) => break 'event,
                    (Keycode::Space, _) => fast_forward = true,
                    (Keycode::Backspace, _) => {
                        vm.reset();
                        args.program.load_into(&mut vm)?;
                        host.frame(vm.frame());
                    }
                    (Keycode::Tab, _) => info!("{}", describe(vm.registers(), vm.keys())),
                    _ => continue,
                },
                Event::KeyUp {
                    keycode: Some(key), ..
                } => match (key, keymap(key)) {
                    (_, Some(kc)) => vm.key_release(kc),
                    (Keycode::Space, _) => fast_forward = false,
                    _ => continue,
                },
                _ => continue,
            };
        }

        match vm.step(&mut host) {
            Ok(_) => {}
            // already logged by the vm; the word has been skipped
            Err(e) if !e.is_fatal() => {}
            Err(e) => return Err(e.into()),
        }
        host.end_step();

        // Handle timing
        let current_time = Instant::now();
        let elapsed_cycle_time = current_time - last_cycle;
        if !fast_forward && cycle_time > elapsed_cycle_time {
            std::thread::sleep(cycle_time - elapsed_cycle_time);
        }
        last_cycle = Instant::now();
    }

    Ok(())
}

/// One-line register dump for the log.
fn describe(registers: &Registers, keys: &Keypad) -> String {
    let v: Vec<String> = registers.v.iter().map(|r| format!("{:02x}", r)).collect();
    let held: Vec<String> = (0u8..)
        .zip(keys.pressed().iter())
        .filter(|&(_, &pressed)| pressed)
        .map(|(key, _)| format!("{:x}", key))
        .collect();
    format!(
        "pc={:04x} i={:04x} sp={} dt={:02x} st={:02x} v=[{}] keys=[{}]",
        registers.pc,
        registers.i,
        registers.sp,
        registers.delay_timer,
        registers.sound_timer,
        v.join(" "),
        held.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_describe() {
        let mut registers = Registers::new();
        registers.v[0xF] = 0x1;
        registers.i = 0x22A;
        let mut keys = Keypad::new();
        keys.press(0x1);
        keys.press(0xC);
        assert_eq!(
            describe(&registers, &keys),
            "pc=0200 i=022a sp=0 dt=00 st=00 v=[00 00 00 00 00 00 00 00 00 00 00 00 00 00 00 01] keys=[1 c]"
        );
    }
}
