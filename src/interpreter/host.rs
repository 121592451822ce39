use std::{
    collections::VecDeque,
    io::{self, BufRead, Write},
};

/// The outside world a running program talks to.
///
/// `show` is called once for every executed `show` statement with the
/// rendered value, and `ask` once for every evaluated `ask` with its prompt.
/// `ask` blocks: nothing after it runs until the host returns the answer.
///
/// `&mut H` is a host whenever `H` is, so a caller can lend a host to a run
/// and inspect it afterwards.
pub trait Host {
    /// Receives one line of program output.
    fn show(&mut self, text: &str);

    /// Answers a prompt. The answer becomes a text value.
    fn ask(&mut self, prompt: &str) -> String;
}

impl<H: Host + ?Sized> Host for &mut H {
    fn show(&mut self, text: &str) {
        (**self).show(text);
    }

    fn ask(&mut self, prompt: &str) -> String {
        (**self).ask(prompt)
    }
}

/// A host bound to the process's standard streams.
///
/// Output goes to stdout, one line per `show`. Prompts are written to stdout
/// without a newline and answered with one line of stdin. At end of input, or
/// when either stream fails, the answer is empty text.
#[derive(Debug, Default, Clone, Copy)]
pub struct StdioHost;

impl Host for StdioHost {
    fn show(&mut self, text: &str) {
        println!("{text}");
    }

    fn ask(&mut self, prompt: &str) -> String {
        let mut stdout = io::stdout();
        if write!(stdout, "{prompt} ").and_then(|()| stdout.flush())
                                      .is_err()
        {
            return String::new();
        }

        let mut answer = String::new();
        if io::stdin().lock().read_line(&mut answer).is_err() {
            return String::new();
        }
        answer.trim_end_matches(['\n', '\r']).to_string()
    }
}

/// A host that records everything and answers from a queue.
///
/// Useful for tests and for embedding a program whose input is known up
/// front. Once the queue is exhausted every further prompt is answered with
/// empty text.
///
/// # Example
/// ```
/// use kodme::interpreter::host::ScriptedHost;
///
/// let mut host = ScriptedHost::with_answers(["Ada"]);
/// kodme::run("ask \"Name?\" name\nshow \"Hi \" + name", &mut host).unwrap();
///
/// assert_eq!(host.prompts, vec!["Name?"]);
/// assert_eq!(host.output, vec!["Hi Ada"]);
/// ```
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ScriptedHost {
    /// Every line passed to `show`, in order.
    pub output:  Vec<String>,
    /// Every prompt passed to `ask`, in order.
    pub prompts: Vec<String>,
    answers:     VecDeque<String>,
}

impl ScriptedHost {
    /// Creates a host that answers prompts with `answers`, first to last.
    #[must_use]
    pub fn with_answers<I, S>(answers: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        Self { answers: answers.into_iter().map(Into::into).collect(),
               ..Self::default() }
    }

    /// Returns the answers that have not been used yet.
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Host for ScriptedHost {
    fn show(&mut self, text: &str) {
        self.output.push(text.to_string());
    }

    fn ask(&mut self, prompt: &str) -> String {
        self.prompts.push(prompt.to_string());
        self.answers.pop_front().unwrap_or_default()
    }
}

/// A host made of two closures, one per event.
///
/// # Example
/// ```
/// use kodme::interpreter::host::Callbacks;
///
/// let mut lines = Vec::new();
/// let host = Callbacks::new(|text: &str| lines.push(text.to_string()),
///                           |_: &str| "42".to_string());
/// kodme::run("show ask \"Number?\"", host).unwrap();
///
/// assert_eq!(lines, vec!["42"]);
/// ```
pub struct Callbacks<S, A> {
    on_show: S,
    on_ask:  A,
}

impl<S, A> Callbacks<S, A>
    where S: FnMut(&str),
          A: FnMut(&str) -> String
{
    /// Wraps a `show` callback and an `ask` callback.
    pub const fn new(on_show: S, on_ask: A) -> Self {
        Self { on_show, on_ask }
    }
}

impl<S, A> Host for Callbacks<S, A>
    where S: FnMut(&str),
          A: FnMut(&str) -> String
{
    fn show(&mut self, text: &str) {
        (self.on_show)(text);
    }

    fn ask(&mut self, prompt: &str) -> String {
        (self.on_ask)(prompt)
    }
}
