//! Tests for the voice command interpreter

#[cfg(test)]
mod tests {
    use super::super::interpreter::CommandInterpreter;
    use crate::todo::TodoStore;

    #[test]
    fn test_extract_after_trigger() {
        let interp = CommandInterpreter::default();
        assert_eq!(
            interp.extract("please add todo buy milk"),
            Some("buy milk")
        );
    }

    #[test]
    fn test_extract_is_case_insensitive() {
        let interp = CommandInterpreter::default();
        // Only the trigger match ignores case; extracted text keeps its own.
        assert_eq!(interp.extract("ADD TODO Walk Dog"), Some("Walk Dog"));
        assert_eq!(interp.extract("Add Todo feed cat"), Some("feed cat"));
    }

    #[test]
    fn test_extract_without_trigger() {
        let interp = CommandInterpreter::default();
        assert_eq!(interp.extract("remind me to buy milk"), None);
    }

    #[test]
    fn test_extract_empty_payload() {
        let interp = CommandInterpreter::default();
        assert_eq!(interp.extract("add todo"), None);
        assert_eq!(interp.extract("add todo   "), None);
    }

    #[test]
    fn test_extract_uses_first_occurrence() {
        let interp = CommandInterpreter::default();
        // Text before the first trigger is discarded; the second trigger
        // becomes part of the payload.
        assert_eq!(
            interp.extract("ok add todo one add todo two"),
            Some("one add todo two")
        );
    }

    #[test]
    fn test_extract_custom_trigger() {
        let interp = CommandInterpreter::new("new task");
        assert_eq!(interp.extract("New Task water plants"), Some("water plants"));
        assert_eq!(interp.extract("add todo water plants"), None);
    }

    #[test]
    fn test_dispatch_creates_and_resets() {
        let interp = CommandInterpreter::default();
        let mut store = TodoStore::new();
        let mut transcript = "please add todo buy milk".to_string();

        let id = interp.dispatch(&mut transcript, &mut store);

        assert!(id.is_some());
        assert_eq!(transcript, "");
        assert_eq!(store.len(), 1);
        assert_eq!(store.items()[0].text, "buy milk");
        assert!(!store.items()[0].is_complete);
    }

    #[test]
    fn test_dispatch_empty_payload_keeps_transcript() {
        let interp = CommandInterpreter::default();
        let mut store = TodoStore::new();
        let mut transcript = "add todo".to_string();

        let id = interp.dispatch(&mut transcript, &mut store);

        assert!(id.is_none());
        assert_eq!(transcript, "add todo");
        assert!(store.is_empty());
    }

    #[test]
    fn test_dispatch_without_trigger_keeps_transcript() {
        let interp = CommandInterpreter::default();
        let mut store = TodoStore::new();
        let mut transcript = "just chatting away".to_string();

        assert!(interp.dispatch(&mut transcript, &mut store).is_none());
        assert_eq!(transcript, "just chatting away");
        assert!(store.is_empty());
    }

    #[test]
    fn test_dispatch_does_not_fire_twice() {
        let interp = CommandInterpreter::default();
        let mut store = TodoStore::new();
        let mut transcript = "add todo buy milk".to_string();

        interp.dispatch(&mut transcript, &mut store);
        // Transcript was cleared, so a second update with no new speech
        // has nothing to act on.
        interp.dispatch(&mut transcript, &mut store);

        assert_eq!(store.len(), 1);
    }
}
