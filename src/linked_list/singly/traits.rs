use core::ptr::NonNull;

/// A trait for a forward link in a singly linked chain.
pub trait Link: Sized {
    /// The target type of the link.
    type Target;

    /// Get the next pointer in the chain
    fn next(&self) -> Option<NonNull<Self::Target>>;

    /// Set the next pointer in the chain
    fn set_next(&mut self, next: Option<NonNull<Self::Target>>);

    /// Take the next pointer, leaving `None` behind
    fn take_next(&mut self) -> Option<NonNull<Self::Target>> {
        let next = self.next();
        self.set_next(None);
        next
    }
}

/// A trait for a node that owns a value.
pub trait NodeWithData: Link {
    /// The type of data stored in the node.
    type Data: ?Sized;

    /// Get the data associated with the node
    fn data(&self) -> &Self::Data;
}
