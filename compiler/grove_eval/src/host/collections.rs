//! The `collections` module: mutable container classes.
//!
//! Instances are shared by handle, so state lives behind `Cell`/`RefCell`.
//! Grove is single-threaded; no borrow is held across a call back into the
//! evaluator.

use std::cell::{Cell, RefCell};
use std::fmt;

use super::module::HostModule;
use super::{args, Arity, HostClass, HostObject, Member};
use crate::errors::{host_error, integer_overflow, undefined_method, EvalResult};
use crate::value::Value;

pub const COUNTER: HostClass = HostClass::new("Counter", new_counter);
pub const STACK: HostClass = HostClass::new("Stack", new_stack);

fn new_counter() -> Value {
    Value::object(Counter::default())
}

fn new_stack() -> Value {
    Value::object(Stack::default())
}

pub fn module() -> HostModule {
    HostModule::new("collections").class(COUNTER).class(STACK)
}

/// Integer counter starting at zero.
#[derive(Debug, Default)]
pub struct Counter {
    count: Cell<i64>,
}

impl Counter {
    pub fn get(&self) -> i64 {
        self.count.get()
    }

    fn add(&self, n: i64) -> EvalResult {
        let next = self
            .count
            .get()
            .checked_add(n)
            .ok_or_else(|| integer_overflow("Counter.add"))?;
        self.count.set(next);
        Ok(Value::Int(next))
    }
}

impl HostObject for Counter {
    fn type_name(&self) -> &str {
        "Counter"
    }

    fn member(&self, name: &str) -> Option<Member> {
        let arity = match name {
            "increment" | "get" | "reset" => Arity::Exact(0),
            "add" => Arity::Exact(1),
            _ => return None,
        };
        Some(Member::Method(arity))
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> EvalResult {
        match method {
            "increment" => self.add(1),
            "add" => self.add(args::int(&args, 0, "Counter.add")?),
            "get" => Ok(Value::Int(self.get())),
            "reset" => {
                self.count.set(0);
                Ok(Value::Int(0))
            }
            _ => Err(undefined_method(method, self.type_name())),
        }
    }

    fn describe(&self) -> String {
        format!("Counter({})", self.get())
    }
}

/// LIFO stack of arbitrary values.
///
/// A stack may hold itself; `describe` renders the inner reference as
/// `Stack([...])`. Such a stack is never freed.
#[derive(Default)]
pub struct Stack {
    items: RefCell<Vec<Value>>,
    describing: Cell<bool>,
}

impl fmt::Debug for Stack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stack").field("len", &self.len()).finish()
    }
}

impl Stack {
    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl HostObject for Stack {
    fn type_name(&self) -> &str {
        "Stack"
    }

    fn member(&self, name: &str) -> Option<Member> {
        let arity = match name {
            "pop" | "peek" | "len" | "is_empty" => Arity::Exact(0),
            "push" => Arity::AtLeast(1),
            _ => return None,
        };
        Some(Member::Method(arity))
    }

    fn invoke(&self, method: &str, args: Vec<Value>) -> EvalResult {
        match method {
            // push accepts several values and returns the new depth
            "push" => {
                let mut items = self.items.borrow_mut();
                items.extend(args);
                Ok(Value::Int(depth(items.len())?))
            }
            "pop" => self
                .items
                .borrow_mut()
                .pop()
                .ok_or_else(|| host_error("Stack.pop", "pop from empty stack")),
            "peek" => self
                .items
                .borrow()
                .last()
                .cloned()
                .ok_or_else(|| host_error("Stack.peek", "peek at empty stack")),
            "len" => Ok(Value::Int(depth(self.len())?)),
            "is_empty" => Ok(Value::Int(i64::from(self.is_empty()))),
            _ => Err(undefined_method(method, self.type_name())),
        }
    }

    fn describe(&self) -> String {
        if self.describing.replace(true) {
            return "Stack([...])".to_owned();
        }
        let items: Vec<String> = self.items.borrow().iter().map(Value::repr).collect();
        self.describing.set(false);
        format!("Stack([{}])", items.join(", "))
    }
}

fn depth(len: usize) -> EvalResult<i64> {
    i64::try_from(len).map_err(|_| integer_overflow("Stack.len"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_counter() {
        let counter = Counter::default();
        assert_eq!(counter.invoke("increment", Vec::new()), Ok(Value::Int(1)));
        assert_eq!(counter.invoke("add", vec![Value::Int(4)]), Ok(Value::Int(5)));
        assert_eq!(counter.describe(), "Counter(5)");
        assert_eq!(counter.invoke("reset", Vec::new()), Ok(Value::Int(0)));
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_counter_overflow() {
        let counter = Counter::default();
        assert!(counter.invoke("add", vec![Value::Int(i64::MAX)]).is_ok());
        assert!(counter.invoke("increment", Vec::new()).is_err());
        assert_eq!(counter.get(), i64::MAX);
    }

    #[test]
    fn test_stack() {
        let stack = Stack::default();
        assert_eq!(stack.invoke("is_empty", Vec::new()), Ok(Value::Int(1)));
        assert_eq!(
            stack.invoke("push", vec![Value::Int(1), Value::string("two")]),
            Ok(Value::Int(2))
        );
        assert_eq!(stack.describe(), "Stack([1, \"two\"])");
        assert_eq!(stack.invoke("peek", Vec::new()), Ok(Value::string("two")));
        assert_eq!(stack.invoke("pop", Vec::new()), Ok(Value::string("two")));
        assert_eq!(stack.invoke("len", Vec::new()), Ok(Value::Int(1)));
    }

    #[test]
    fn test_stack_holding_itself() {
        let handle = new_stack();
        let Value::Object(stack) = &handle else {
            panic!("expected an object, got {handle:?}");
        };
        assert_eq!(stack.invoke("push", vec![handle.clone(), Value::Int(7)]), Ok(Value::Int(2)));
        assert_eq!(stack.describe(), "Stack([Stack([...]), 7])");
        // Rendering again still works once the first pass has finished.
        assert_eq!(handle.to_string(), "Stack([Stack([...]), 7])");
        assert!(format!("{handle:?}").contains("Stack([...])"));
        assert_eq!(format!("{:?}", Stack::default()), "Stack { len: 0 }");
    }

    #[test]
    fn test_empty_stack_errors() {
        let stack = Stack::default();
        assert!(stack.invoke("pop", Vec::new()).is_err());
        assert!(stack.invoke("peek", Vec::new()).is_err());
    }

    #[test]
    fn test_module_exposes_classes() {
        let module = module();
        assert_eq!(module.member("Counter"), Some(Member::Class(COUNTER)));
        assert_eq!(module.member("Stack"), Some(Member::Class(STACK)));
        assert_eq!(module.member("Queue"), None);
    }
}
