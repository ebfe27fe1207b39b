use super::Val;
use crate::lang::token::Function;
use std::ops::RangeInclusive;

impl Function {
    pub fn arity(self) -> RangeInclusive<usize> {
        use Function::*;
        match self {
            Abs | Sgn | Int | Fix | Round | Floor | Ceil | Sqr | Sin | Cos | Tan | Atn | Log
            | Exp => 1..=1,
            Pow | Min | Max => 2..=2,
            Rnd => 0..=1,
            Len | Upper | Lower | Trim | Str | Val | Chr | Asc => 1..=1,
            Left | Right | Instr => 2..=2,
            Mid => 2..=3,
            Replace => 3..=3,
            Timer | Ticks | Date | Time => 0..=0,
            HasKey => 1..=usize::MAX,
            GetKey | MouseX | MouseY | MouseB => 0..=0,
            LoadSound | ReadFile | FileExists | DeleteFile | HttpGet => 1..=1,
            WriteFile | AppendFile | HttpPost => 2..=2,
        }
    }

    /// Functions of their arguments alone. `None` for the ones that need
    /// the runtime: clocks, randomness, arrays and the host.
    pub fn evaluate(self, args: &[Val]) -> Option<Val> {
        let n = |i: usize| args.get(i).map_or(0.0, |v| v.to_number());
        let s = |i: usize| args.get(i).map(|v| v.to_string()).unwrap_or_default();
        Some(match self {
            Function::Abs => Val::Number(n(0).abs()),
            Function::Sgn => Val::Number(if n(0) == 0.0 { 0.0 } else { n(0).signum() }),
            Function::Int | Function::Floor => Val::Number(n(0).floor()),
            Function::Fix => Val::Number(n(0).trunc()),
            Function::Round => Val::Number(n(0).round()),
            Function::Ceil => Val::Number(n(0).ceil()),
            Function::Sqr => Val::Number(n(0).sqrt()),
            Function::Sin => Val::Number(n(0).sin()),
            Function::Cos => Val::Number(n(0).cos()),
            Function::Tan => Val::Number(n(0).tan()),
            Function::Atn => Val::Number(n(0).atan()),
            Function::Log => Val::Number(n(0).ln()),
            Function::Exp => Val::Number(n(0).exp()),
            Function::Pow => Val::Number(n(0).powf(n(1))),
            Function::Min => Val::Number(n(0).min(n(1))),
            Function::Max => Val::Number(n(0).max(n(1))),
            Function::Len => Val::Number(s(0).chars().count() as f64),
            Function::Left => Val::String(s(0).chars().take(count(n(1))).collect()),
            Function::Right => {
                let chars: Vec<char> = s(0).chars().collect();
                let take = count(n(1)).min(chars.len());
                Val::String(chars[chars.len() - take..].iter().collect())
            }
            Function::Mid => {
                let text = s(0);
                let chars = text.chars().skip(count(n(1)).saturating_sub(1));
                Val::String(match args.get(2) {
                    Some(len) => chars.take(count(len.to_number())).collect(),
                    None => chars.collect(),
                })
            }
            Function::Upper => Val::String(s(0).to_uppercase()),
            Function::Lower => Val::String(s(0).to_lowercase()),
            Function::Trim => Val::String(s(0).trim().to_string()),
            Function::Instr => {
                let haystack = s(0);
                Val::Number(match haystack.find(&s(1)) {
                    Some(byte) => (haystack[..byte].chars().count() + 1) as f64,
                    None => 0.0,
                })
            }
            Function::Str => Val::String(s(0)),
            Function::Val => Val::Number(n(0)),
            Function::Chr => Val::String(
                std::char::from_u32(n(0) as u32)
                    .map(|c| c.to_string())
                    .unwrap_or_default(),
            ),
            Function::Asc => Val::Number(s(0).chars().next().map_or(0.0, |c| c as u32 as f64)),
            Function::Replace => {
                let (haystack, from) = (s(0), s(1));
                if from.is_empty() {
                    Val::String(haystack)
                } else {
                    Val::String(haystack.replace(&from, &s(2)))
                }
            }
            _ => return None,
        })
    }
}

// Whole, non-negative count from a BASIC number.
fn count(n: f64) -> usize {
    if n.is_finite() && n > 0.0 {
        n as usize
    } else {
        0
    }
}
