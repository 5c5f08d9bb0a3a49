use {
    crate::{Addr, Binary},
    serde::{Deserialize, Serialize},
    strum_macros::{AsRefStr, Display, EnumString},
};

/// How the call completes on the ledger. Enrollment calls provision the
/// caller's private namespace and ignore the operation tag.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CompletionType {
    #[default]
    Normal,
    Enrollment,
}

/// The operations a normal call can name.
#[derive(EnumString, Display, AsRefStr, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum Op {
    CreateProposal,
    #[strum(serialize = "vote")]
    CastVote,
    CloseVoting,
    GetResults,
}

impl Op {
    /// Number of arguments a call with this op must carry, counting the tag
    /// itself.
    pub const fn arity(self) -> usize {
        match self {
            Op::CreateProposal | Op::CastVote => 2,
            Op::CloseVoting | Op::GetResults => 1,
        }
    }
}

/// A single request to the engine.
///
/// `op` is the tag, kept as a raw string because an unknown tag is a
/// rejection, not a decoding failure. `args` are the arguments that follow
/// the tag.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Call {
    #[serde(default)]
    pub completion: CompletionType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub op: Option<String>,
    #[serde(default)]
    pub args: Vec<Binary>,
    pub caller: Addr,
}

impl Call {
    pub fn new<O, A>(caller: Addr, op: O, args: A) -> Self
    where
        O: Into<String>,
        A: IntoIterator,
        A::Item: Into<Binary>,
    {
        Self {
            completion: CompletionType::Normal,
            op: Some(op.into()),
            args: args.into_iter().map(Into::into).collect(),
            caller,
        }
    }

    pub fn enroll(caller: Addr) -> Self {
        Self {
            completion: CompletionType::Enrollment,
            op: None,
            args: Vec::new(),
            caller,
        }
    }

    pub fn create_proposal<T>(caller: Addr, title: T) -> Self
    where
        T: Into<Binary>,
    {
        Self::new(caller, Op::CreateProposal.as_ref(), [title])
    }

    pub fn cast_vote<T>(caller: Addr, option: T) -> Self
    where
        T: Into<Binary>,
    {
        Self::new(caller, Op::CastVote.as_ref(), [option])
    }

    pub fn close_voting(caller: Addr) -> Self {
        Self::new(caller, Op::CloseVoting.as_ref(), Vec::<Binary>::new())
    }

    pub fn get_results(caller: Addr) -> Self {
        Self::new(caller, Op::GetResults.as_ref(), Vec::<Binary>::new())
    }

    /// The number of arguments the call carries, counting the tag if present.
    pub fn arg_count(&self) -> usize {
        self.args.len() + usize::from(self.op.is_some())
    }
}

// ----------------------------------- tests -----------------------------------
