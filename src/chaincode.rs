//! Entry points the host ledger calls: `init`, `invoke` and `query`.

use std::str::FromStr;
use tracing::{debug, info, warn};

use crate::account::AccountStore;
use crate::encoding::encode_record;
use crate::error::{LedgerError, LedgerResult};
use crate::storage::{StateError, WorldState, PAPER_KEYS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvokeFunction {
    CreateAccount,
}

impl FromStr for InvokeFunction {
    type Err = LedgerError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "createAccount" => Ok(InvokeFunction::CreateAccount),
            _ => Err(LedgerError::UnknownFunction(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFunction {
    GetCompany,
    /// Any other name: read `args[0]` as a raw key.
    Raw(String),
}

impl FromStr for QueryFunction {
    type Err = std::convert::Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "GetCompany" => QueryFunction::GetCompany,
            other => QueryFunction::Raw(other.to_string()),
        })
    }
}

fn first_arg<'a>(function: &str, args: &'a [String]) -> LedgerResult<&'a str> {
    args.first()
        .map(String::as_str)
        .ok_or_else(|| LedgerError::InvalidArgument(format!("{} needs a key argument", function)))
}

pub struct Chaincode<S: WorldState> {
    state: S,
}

impl<S: WorldState> Chaincode<S> {
    pub fn new(state: S) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    /// Seeds the paper-key bookkeeping list. A failed write is logged, not returned.
    pub fn init(&self, function: &str, _args: &[String]) -> LedgerResult<()> {
        info!("Init firing, function ignored: {}", function);
        match encode_record(&Vec::<String>::new()) {
            Ok(blank) => {
                if let Err(e) = self.state.put_state(PAPER_KEYS, &blank) {
                    warn!("Failed to initialize paper key collection: {}", e);
                }
            }
            Err(e) => warn!("Failed to encode paper key collection: {}", e),
        }
        info!("Initialization complete");
        Ok(())
    }

    pub fn invoke(&self, function: &str, args: &[String]) -> LedgerResult<()> {
        info!("Invoke running, function: {}", function);
        match InvokeFunction::from_str(function)? {
            InvokeFunction::CreateAccount => AccountStore::new(&self.state).create_account(args),
        }
    }

    pub fn query(&self, function: &str, args: &[String]) -> LedgerResult<Vec<u8>> {
        let route = QueryFunction::from_str(function).unwrap_or_else(|never| match never {});
        match route {
            QueryFunction::GetCompany => {
                let id = first_arg(function, args)?;
                debug!("Getting company {}", id);
                let account = AccountStore::new(&self.state).get_account(id)?;
                encode_record(&account)
            }
            QueryFunction::Raw(name) => {
                let key = first_arg(&name, args)?;
                debug!("Generic query {} for key {}", name, key);
                self.state.get_state(key).map_err(|e| match e {
                    StateError::NotFound(key) => LedgerError::NotFound(key),
                    StateError::Backend(e) => LedgerError::Storage(e),
                })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::account::Account;
    use crate::encoding::decode_record;
    use crate::storage::{AbsenceSignal, MemoryState};

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    struct NoWrites;

    impl WorldState for NoWrites {
        fn get_state(&self, key: &str) -> Result<Vec<u8>, StateError> {
            Err(StateError::NotFound(key.to_string()))
        }

        fn put_state(&self, _key: &str, _value: &[u8]) -> Result<(), StateError> {
            Err(StateError::Backend("rejected".to_string()))
        }
    }

    #[test]
    fn test_init_writes_empty_paper_keys() {
        let cc = Chaincode::new(MemoryState::default());
        cc.init("whatever", &args(&["ignored"])).unwrap();
        assert_eq!(cc.state().get_state("PaperKeys").unwrap(), b"[]");
    }

    #[test]
    fn test_init_swallows_write_failure() {
        let cc = Chaincode::new(NoWrites);
        assert!(cc.init("init", &[]).is_ok());
    }

    #[test]
    fn test_invoke_routes_create_account() {
        let cc = Chaincode::new(MemoryState::default());
        cc.invoke("createAccount", &args(&["alice"])).unwrap();

        let bytes = cc.query("GetCompany", &args(&["alice"])).unwrap();
        let account: Account = decode_record(&bytes).unwrap();
        assert_eq!(account, Account::open("alice"));

        assert!(matches!(
            cc.invoke("createAccount", &args(&["alice"])),
            Err(LedgerError::AlreadyExists(_))
        ));
    }

    #[test]
    fn test_invoke_unknown_function() {
        let cc = Chaincode::new(MemoryState::default());
        let err = cc.invoke("transferPaper", &args(&["x"])).unwrap_err();
        assert!(matches!(err, LedgerError::UnknownFunction(ref f) if f == "transferPaper"));
        assert_eq!(cc.state().write_count(), 0);
    }

    #[test]
    fn test_generic_query_reads_raw_key() {
        let cc = Chaincode::new(MemoryState::default());
        cc.init("init", &[]).unwrap();
        cc.invoke("createAccount", &args(&["bob"])).unwrap();

        assert_eq!(cc.query("anything", &args(&["PaperKeys"])).unwrap(), b"[]");
        let raw = cc.query("GetState", &args(&["acct:bob", "extra"])).unwrap();
        assert_eq!(decode_record::<Account>(&raw).unwrap().id, "bob");
    }

    #[test]
    fn test_query_missing_keys() {
        let cc = Chaincode::new(MemoryState::new(AbsenceSignal::NotFound));
        assert!(matches!(
            cc.query("GetCompany", &args(&["ghost"])),
            Err(LedgerError::NotFound(_))
        ));
        assert!(matches!(
            cc.query("read", &args(&["cp:NOPE"])),
            Err(LedgerError::NotFound(_))
        ));

        let lax = Chaincode::new(MemoryState::new(AbsenceSignal::EmptyValue));
        assert!(lax.query("read", &args(&["cp:NOPE"])).unwrap().is_empty());
    }

    #[test]
    fn test_query_without_arguments() {
        let cc = Chaincode::new(MemoryState::default());
        assert!(matches!(cc.query("GetCompany", &[]), Err(LedgerError::InvalidArgument(_))));
        assert!(matches!(cc.query("read", &[]), Err(LedgerError::InvalidArgument(_))));
    }

    #[test]
    fn test_function_names() {
        assert_eq!(
            "createAccount".parse::<InvokeFunction>().unwrap(),
            InvokeFunction::CreateAccount
        );
        assert!("CreateAccount".parse::<InvokeFunction>().is_err());
        assert_eq!("GetCompany".parse::<QueryFunction>(), Ok(QueryFunction::GetCompany));
        assert_eq!(
            "getcompany".parse::<QueryFunction>(),
            Ok(QueryFunction::Raw("getcompany".to_string()))
        );
    }
}
