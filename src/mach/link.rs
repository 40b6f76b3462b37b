use super::{Address, ScriptInfo, Statement};

/// ## Jump resolution
///
/// A function statement at indentation `D` jumps to the first later
/// statement indented `D` or less, or to the end of the script. Open
/// jumps are kept on a stack ordered by strictly increasing indentation,
/// so one forward pass resolves every jump.

#[derive(Debug, Default)]
pub struct Link {
    pending: Vec<(u8, Address)>,
    resolved: Vec<(Address, Address)>,
}

impl Link {
    pub fn new() -> Link {
        Link::default()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
        self.resolved.clear();
    }

    pub fn visit(&mut self, statement: &Statement) {
        let indent = statement.indent();
        while let Some(&(open, slot)) = self.pending.last() {
            if indent > open {
                break;
            }
            self.resolved.push((slot, statement.addr));
            self.pending.pop();
        }
        if statement.is_function() && statement.slot.is_some() {
            self.pending.push((indent, statement.addr + 1));
        }
    }

    /// Jumps still open fall through to `end`.
    pub fn finish(&mut self, end: Address) {
        for (_, slot) in self.pending.drain(..).rev() {
            self.resolved.push((slot, end));
        }
    }

    pub fn link(&mut self, script: &mut ScriptInfo) -> usize {
        self.clear();
        for statement in script.statements() {
            self.visit(&statement);
        }
        self.finish(script.len());
        let mut patched = 0;
        for (slot, dest) in self.resolved.drain(..) {
            tracing::trace!("{}: jump at {} -> {}", script.name(), slot, dest);
            if script.patch(slot, dest as u32) {
                patched += 1;
            }
        }
        patched
    }
}

/// Patches every jump placeholder in `script`. Returns the number patched.
pub fn link(script: &mut ScriptInfo) -> usize {
    Link::new().link(script)
}
